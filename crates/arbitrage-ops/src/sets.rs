//! Logical reductions, elementwise equality and set operations.

use arbitrage_core::prelude::*;

use crate::group::GroupIndex;
use crate::vectorize::vectorize;

fn truthy(op: &'static str, x: Value) -> Result<Vec<bool>> {
    vectorize(x)
        .iter()
        .filter(|v| !v.is_null())
        .map(|v| {
            v.as_bool().ok_or(Error::Type {
                op,
                expected: "logical",
                actual: v.data_type(),
            })
        })
        .collect()
}

/// True if any element is true (non-zero). Nulls are skipped; empty is false.
pub fn any(x: impl Into<Value>) -> Result<bool> {
    Ok(truthy("any", x.into())?.into_iter().any(|b| b))
}

/// True if every element is true (non-zero). Nulls are skipped; empty is true.
pub fn all(x: impl Into<Value>) -> Result<bool> {
    Ok(truthy("all", x.into())?.into_iter().all(|b| b))
}

fn scalar_eq(a: &Scalar, b: &Scalar, tolerance: f64) -> Scalar {
    if a.is_null() || b.is_null() {
        return Scalar::Null;
    }
    if tolerance > 0.0 {
        if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
            if !matches!(a, Scalar::Bool(_)) && !matches!(b, Scalar::Bool(_)) {
                return Scalar::Bool((x - y).abs() <= tolerance);
            }
        }
    }
    Scalar::Bool(a == b)
}

/// Elementwise equality of two equal-length sequences.
///
/// Lengths must match exactly; shorter inputs are not recycled. A null on
/// either side yields null at that position.
pub fn is_equal(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    is_equal_with(&Config::default(), a, b)
}

pub fn is_equal_with(
    cfg: &Config,
    a: impl Into<Value>,
    b: impl Into<Value>,
) -> Result<Vec<Scalar>> {
    let (a, b) = (vectorize(a), vectorize(b));
    if a.len() != b.len() {
        return Err(Error::length("is_equal", a.len(), b.len()));
    }
    Ok(a.iter()
        .zip(&b)
        .map(|(x, y)| scalar_eq(x, y, cfg.float_tolerance))
        .collect())
}

fn columns_of(x: Value) -> Vec<Vec<Scalar>> {
    match x {
        Value::List(l) => l,
        Value::Frame(f) => f.into_columns().into_iter().map(|c| c.values).collect(),
        other => vec![vectorize(other)],
    }
}

/// One logical per column: true when every element of the column pair matches.
pub fn is_equal_cols(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    let (a, b) = (columns_of(a.into()), columns_of(b.into()));
    if a.len() != b.len() {
        return Err(Error::length("is_equal_cols", a.len(), b.len()));
    }
    a.iter()
        .zip(&b)
        .map(|(x, y)| {
            if x.len() != y.len() {
                return Err(Error::length("is_equal_cols", x.len(), y.len()));
            }
            Ok(Scalar::Bool(x == y))
        })
        .collect()
}

/// Distinct values of `a` not in `b`.
pub fn setdiff(a: impl Into<Value>, b: impl Into<Value>) -> Vec<Scalar> {
    let seen = GroupIndex::build(&vectorize(b));
    GroupIndex::build(&vectorize(a))
        .into_levels()
        .into_iter()
        .filter(|v| !seen.contains(v))
        .collect()
}

/// Distinct values of `a` also in `b`, in `a`'s order.
pub fn intersection(a: impl Into<Value>, b: impl Into<Value>) -> Vec<Scalar> {
    let seen = GroupIndex::build(&vectorize(b));
    GroupIndex::build(&vectorize(a))
        .into_levels()
        .into_iter()
        .filter(|v| seen.contains(v))
        .collect()
}

/// Distinct values of `a` followed by the new ones of `b`.
pub fn union(a: impl Into<Value>, b: impl Into<Value>) -> Vec<Scalar> {
    let mut index = GroupIndex::build(&vectorize(a));
    for v in vectorize(b) {
        index.push(&v);
    }
    index.into_levels()
}

/// Membership test (`%in%`): one logical per element of `x`.
pub fn within(x: impl Into<Value>, xs: impl Into<Value>) -> Vec<Scalar> {
    let set = GroupIndex::build(&vectorize(xs));
    vectorize(x)
        .iter()
        .map(|v| Scalar::Bool(set.contains(v)))
        .collect()
}

/// Every pair `(a[i], b[j])`, `a`-major.
pub fn cartesian_product(a: impl Into<Value>, b: impl Into<Value>) -> Vec<Vec<Scalar>> {
    let (a, b) = (vectorize(a), vectorize(b));
    a.iter()
        .flat_map(|x| b.iter().map(move |y| vec![x.clone(), y.clone()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_all_on_empty() {
        assert!(!any(Vec::<Scalar>::new()).unwrap());
        assert!(all(Vec::<Scalar>::new()).unwrap());
        assert!(any(strs(["a"])).is_err());
    }

    #[test]
    fn is_equal_reports_the_operation() {
        let err = is_equal(ints([1, 2, 3]), ints([1, 2])).unwrap_err();
        assert!(err.to_string().starts_with("is_equal: Incompatible lengths"));
    }

    #[test]
    fn tolerance_applies_to_numbers_only() {
        let cfg = Config::default().with_float_tolerance(1e-9);
        let out = is_equal_with(&cfg, nums([0.1 + 0.2]), nums([0.3])).unwrap();
        assert_eq!(out, bools([true]));
        assert_eq!(is_equal(nums([0.1 + 0.2]), nums([0.3])).unwrap(), bools([false]));
    }

    #[test]
    fn union_keeps_first_occurrence() {
        assert_eq!(union(ints([3, 1, 3]), ints([2, 1])), ints([3, 1, 2]));
        assert_eq!(setdiff(ints([1, 2, 3, 2]), ints([2])), ints([1, 3]));
        assert_eq!(intersection(ints([1, 2, 3]), ints([3, 2])), ints([2, 3]));
    }
}
