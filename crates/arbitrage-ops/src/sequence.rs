//! Sequence generation and ordering: `seq`, `rep`, `order`, `unique`.

use std::cmp::Ordering;

use arbitrage_core::prelude::*;

use crate::group::GroupIndex;
use crate::vectorize::vectorize;

/// `0..n-1`; empty for `n <= 0`.
pub fn seq(n: i64) -> Vec<Scalar> {
    ints(0..n.max(0))
}

/// `from..=to`, counting down when `to < from`.
pub fn seq_range(from: i64, to: i64) -> Vec<Scalar> {
    if from <= to {
        ints(from..=to)
    } else {
        ints((to..=from).rev())
    }
}

/// `from, from + by, ...` up to but not past `to`.
///
/// All-integer arguments produce integers, anything else doubles. A zero
/// step, or a step pointing away from `to`, is invalid.
pub fn seq_by(from: impl Into<Scalar>, to: impl Into<Scalar>, by: impl Into<Scalar>) -> Result<Vec<Scalar>> {
    let (from, to, by) = (from.into(), to.into(), by.into());

    if let (Scalar::I64(f), Scalar::I64(t), Scalar::I64(b)) = (&from, &to, &by) {
        let (f, t, b) = (*f, *t, *b);
        check_step(f as f64, t as f64, b as f64)?;
        if f == t {
            return Ok(ints([f]));
        }
        // Every element lies between `f` and `t`, so only the span needs i128.
        let (f, b) = (i128::from(f), i128::from(b));
        let steps = usize::try_from((i128::from(t) - f) / b)
            .map_err(|_| Error::invalid("seq", format!("too many elements from {f} to {t}")))?;
        return Ok(ints((0..=steps).map(|k| (f + k as i128 * b) as i64)));
    }

    let f = number("seq", &from)?;
    let t = number("seq", &to)?;
    let b = number("seq", &by)?;
    check_step(f, t, b)?;
    if f == t {
        return Ok(nums([f]));
    }
    // Tolerate representation error so seq(0, 1, 0.1) ends at 1.
    let steps = ((t - f) / b + 1e-10).floor() as i64;
    Ok(nums((0..=steps).map(|k| f + k as f64 * b)))
}

fn check_step(from: f64, to: f64, by: f64) -> Result<()> {
    if from == to {
        return Ok(());
    }
    if by == 0.0 || !by.is_finite() {
        return Err(Error::invalid("seq", format!("invalid step {by}")));
    }
    if (to - from).signum() != by.signum() {
        return Err(Error::invalid(
            "seq",
            format!("wrong sign in 'by' ({by}) for {from} to {to}"),
        ));
    }
    Ok(())
}

fn number(op: &'static str, s: &Scalar) -> Result<f64> {
    s.as_f64().ok_or(Error::Type {
        op,
        expected: "number",
        actual: s.data_type(),
    })
}

/// The whole sequence repeated `times` times.
pub fn rep(x: impl Into<Value>, times: usize) -> Vec<Scalar> {
    let x = vectorize(x);
    let mut out = Vec::with_capacity(x.len() * times);
    for _ in 0..times {
        out.extend(x.iter().cloned());
    }
    out
}

/// Each element repeated `each` times in place.
pub fn rep_each(x: impl Into<Value>, each: usize) -> Vec<Scalar> {
    vectorize(x)
        .into_iter()
        .flat_map(|v| std::iter::repeat(v).take(each))
        .collect()
}

pub fn rev(x: &[Scalar]) -> Vec<Scalar> {
    x.iter().rev().cloned().collect()
}

fn is_missing(s: &Scalar) -> bool {
    match s {
        Scalar::Null => true,
        Scalar::F64(v) => v.is_nan(),
        _ => false,
    }
}

/// Permutation that sorts `x`; ties keep their original order.
///
/// Missing values (null, NaN) go last in both directions.
pub fn order(x: &[Scalar], decreasing: bool) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..x.len()).collect();
    idx.sort_by(|&i, &j| {
        let (a, b) = (&x[i], &x[j]);
        match (is_missing(a), is_missing(b)) {
            (true, true) => a.total_cmp(b),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if decreasing => b.total_cmp(a),
            (false, false) => a.total_cmp(b),
        }
    });
    idx
}

/// Sorted copy of `x`.
pub fn sort(x: &[Scalar], decreasing: bool) -> Vec<Scalar> {
    order(x, decreasing).into_iter().map(|i| x[i].clone()).collect()
}

/// Distinct values in first-occurrence order.
pub fn unique(x: &[Scalar]) -> Vec<Scalar> {
    GroupIndex::build(x).into_levels()
}
