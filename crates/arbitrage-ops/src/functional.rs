//! Functional combinators over vectorized inputs.

use arbitrage_core::prelude::*;

use crate::recycle::recycle_vectors;
use crate::vectorize::vectorize;

/// Recycle `inputs` and call `f` with the i-th element of each.
pub fn mapply<F>(inputs: Vec<Value>, mut f: F) -> Result<Vec<Scalar>>
where
    F: FnMut(&[Scalar]) -> Scalar,
{
    Ok(zip(inputs)?.iter().map(|row| f(row.as_slice())).collect())
}

/// Left fold starting from `init`.
pub fn fold<F>(x: impl Into<Value>, init: Scalar, f: F) -> Scalar
where
    F: FnMut(Scalar, &Scalar) -> Scalar,
{
    vectorize(x).iter().fold(init, f)
}

/// Left fold seeded with the first element; `None` for empty input.
pub fn reduce<F>(x: impl Into<Value>, mut f: F) -> Option<Scalar>
where
    F: FnMut(Scalar, &Scalar) -> Scalar,
{
    let x = vectorize(x);
    let (first, rest) = x.split_first()?;
    Some(rest.iter().fold(first.clone(), |acc, v| f(acc, v)))
}

/// Every intermediate value of `reduce`, first element included.
pub fn accumulate<F>(x: impl Into<Value>, mut f: F) -> Vec<Scalar>
where
    F: FnMut(Scalar, &Scalar) -> Scalar,
{
    let x = vectorize(x);
    let mut out: Vec<Scalar> = Vec::with_capacity(x.len());
    for v in &x {
        let next = match out.last() {
            Some(acc) => f(acc.clone(), v),
            None => v.clone(),
        };
        out.push(next);
    }
    out
}

/// Rows of the recycled inputs: `zip([1, 2], [3, 4]) == [[1, 3], [2, 4]]`.
pub fn zip(inputs: Vec<Value>) -> Result<Vec<Vec<Scalar>>> {
    let cols = recycle_vectors(
        &Config::default(),
        "zip",
        inputs.into_iter().map(vectorize).collect(),
    )?;
    let n = cols.first().map_or(0, Vec::len);
    Ok((0..n)
        .map(|i| cols.iter().map(|c| c[i].clone()).collect())
        .collect())
}

/// All combinations of the inputs, one row each; the first input varies fastest.
pub fn expand_grid(inputs: Vec<Value>) -> Vec<Vec<Scalar>> {
    let cols: Vec<Vec<Scalar>> = inputs.into_iter().map(vectorize).collect();
    if cols.is_empty() {
        return Vec::new();
    }
    let total: usize = cols.iter().map(Vec::len).product();
    (0..total)
        .map(|mut k| {
            cols.iter()
                .map(|c| {
                    let v = c[k % c.len()].clone();
                    k /= c.len();
                    v
                })
                .collect()
        })
        .collect()
}

/// Join the display forms of `x` with `sep`.
///
/// A list first collapses each inner vector with the configured separator.
pub fn paste(x: impl Into<Value>, sep: &str) -> String {
    paste_with(&Config::default(), x, sep)
}

pub fn paste_with(cfg: &Config, x: impl Into<Value>, sep: &str) -> String {
    match x.into() {
        Value::List(parts) => parts
            .iter()
            .map(|p| join(p, &cfg.collapse))
            .collect::<Vec<_>>()
            .join(sep),
        other => join(&vectorize(other), sep),
    }
}

fn join(x: &[Scalar], sep: &str) -> String {
    x.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus(acc: Scalar, v: &Scalar) -> Scalar {
        Scalar::I64(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0))
    }

    #[test]
    fn accumulate_keeps_every_step() {
        assert_eq!(accumulate(ints([1, 2, 3]), plus), ints([1, 3, 6]));
        assert_eq!(reduce(ints([1, 2, 3]), plus), Some(Scalar::I64(6)));
        assert_eq!(reduce(Vec::<Scalar>::new(), plus), None);
        assert_eq!(fold(ints([1, 2]), Scalar::I64(10), plus), Scalar::I64(13));
    }

    #[test]
    fn expand_grid_varies_first_input_fastest() {
        let grid = expand_grid(values![ints([1, 2]), strs(["a", "b"])]);
        assert_eq!(
            grid,
            vec![
                vector![1, "a"],
                vector![2, "a"],
                vector![1, "b"],
                vector![2, "b"],
            ]
        );
    }

    #[test]
    fn paste_collapses_inner_vectors() {
        let list = vec![ints([1, 2]), strs(["a"])];
        assert_eq!(paste(list, " "), "1,2 a");
        assert_eq!(paste(strs(["x", "y"]), "-"), "x-y");
    }
}
