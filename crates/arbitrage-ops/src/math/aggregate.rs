//! Reductions, running aggregates and frame margins.

use arbitrage_core::prelude::*;

use super::{numbers, Num};
use crate::recycle::recycle_pair;
use crate::vectorize::vectorize;

fn fold_nums(
    xs: impl IntoIterator<Item = Num>,
    init: Num,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Num {
    xs.into_iter().fold(init, |acc, n| match (acc, n) {
        (Num::Na, _) | (_, Num::Na) => Num::Na,
        (Num::Int(a), Num::Int(b)) => match int(a, b) {
            Some(v) => Num::Int(v),
            None => Num::Float(float(a as f64, b as f64)),
        },
        (a, b) => match (a.f64(), b.f64()) {
            (Some(a), Some(b)) => Num::Float(float(a, b)),
            _ => Num::Na,
        },
    })
}

fn sum_nums(xs: impl IntoIterator<Item = Num>) -> Num {
    fold_nums(xs, Num::Int(0), i64::checked_add, |a, b| a + b)
}

/// Running fold; once a null is met every later position is null.
fn running(xs: Vec<Num>, step: impl Fn(Num, Num) -> Num) -> Vec<Scalar> {
    let mut acc: Option<Num> = None;
    xs.into_iter()
        .map(|n| {
            let next = match acc {
                None => n,
                Some(Num::Na) => Num::Na,
                Some(prev) => step(prev, n),
            };
            acc = Some(next);
            next.into_scalar()
        })
        .collect()
}

fn extreme(xs: Vec<Num>, pick_left: fn(f64, f64) -> bool) -> Num {
    let mut best: Option<Num> = None;
    for n in xs {
        let (Some(v), b) = (n.f64(), best) else {
            return Num::Na;
        };
        best = match b.and_then(Num::f64) {
            Some(cur) if pick_left(cur, v) || cur.is_nan() => b,
            _ => Some(n),
        };
    }
    best.unwrap_or(Num::Na)
}

/// Sum; integers stay integral unless they overflow. Empty sums are `0`.
pub fn sum(x: impl Into<Value>) -> Result<Scalar> {
    Ok(sum_nums(numbers("sum", &vectorize(x))?).into_scalar())
}

/// Product; empty products are `1`.
pub fn prod(x: impl Into<Value>) -> Result<Scalar> {
    let xs = numbers("prod", &vectorize(x))?;
    Ok(fold_nums(xs, Num::Int(1), i64::checked_mul, |a, b| a * b).into_scalar())
}

/// Smallest element; null when empty or when any element is null.
pub fn min(x: impl Into<Value>) -> Result<Scalar> {
    Ok(extreme(numbers("min", &vectorize(x))?, |cur, v| cur <= v).into_scalar())
}

pub fn max(x: impl Into<Value>) -> Result<Scalar> {
    Ok(extreme(numbers("max", &vectorize(x))?, |cur, v| cur >= v).into_scalar())
}

/// Arithmetic mean as a double; null when empty.
pub fn mean(x: impl Into<Value>) -> Result<Scalar> {
    let xs = numbers("mean", &vectorize(x))?;
    if xs.is_empty() {
        return Ok(Scalar::Null);
    }
    let n = xs.len() as f64;
    Ok(match sum_nums(xs).f64() {
        Some(total) => Scalar::F64(total / n),
        None => Scalar::Null,
    })
}

/// Successive differences `x[i+1] - x[i]`.
pub fn diff(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    let xs = numbers("diff", &vectorize(x))?;
    Ok(xs
        .windows(2)
        .map(|w| fold_nums([w[0]], w[1], i64::checked_sub, |a, b| a - b).into_scalar())
        .collect())
}

pub fn cumsum(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(running(numbers("cumsum", &vectorize(x))?, |a, b| {
        fold_nums([b], a, i64::checked_add, |a, b| a + b)
    }))
}

pub fn cumprod(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(running(numbers("cumprod", &vectorize(x))?, |a, b| {
        fold_nums([b], a, i64::checked_mul, |a, b| a * b)
    }))
}

pub fn cummax(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(running(numbers("cummax", &vectorize(x))?, |a, b| {
        extreme(vec![a, b], |cur, v| cur >= v)
    }))
}

pub fn cummin(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(running(numbers("cummin", &vectorize(x))?, |a, b| {
        extreme(vec![a, b], |cur, v| cur <= v)
    }))
}

/// Largest gain `x[j] - x[i]` over all `i < j` (may be negative).
///
/// Null for fewer than two elements or when any element is null.
pub fn maxdiff(x: impl Into<Value>) -> Result<Scalar> {
    let xs = numbers("maxdiff", &vectorize(x))?;
    if xs.len() < 2 || xs.contains(&Num::Na) {
        return Ok(Scalar::Null);
    }

    let mut low = xs[0];
    let mut best: Option<Num> = None;
    for &n in &xs[1..] {
        let gain = fold_nums([low], n, i64::checked_sub, |a, b| a - b);
        best = match best {
            Some(b) if b.f64() >= gain.f64() => Some(b),
            _ => Some(gain),
        };
        if n.f64() < low.f64() {
            low = n;
        }
    }
    Ok(best.map_or(Scalar::Null, Num::into_scalar))
}

/// Sum of elementwise products of the recycled inputs.
pub fn inner_product(a: impl Into<Value>, b: impl Into<Value>) -> Result<Scalar> {
    let (a, b) = recycle_pair("inner_product", a.into(), b.into())?;
    let (a, b) = (numbers("inner_product", &a)?, numbers("inner_product", &b)?);
    let products = a
        .into_iter()
        .zip(b)
        .map(|(x, y)| fold_nums([y], x, i64::checked_mul, |a, b| a * b));
    Ok(sum_nums(products).into_scalar())
}

/// Sum of every column, in column order.
pub fn colsums(frame: &Frame) -> Result<Vec<Scalar>> {
    frame
        .columns()
        .iter()
        .map(|c| Ok(sum_nums(numbers("colsums", &c.values)?).into_scalar()))
        .collect()
}

/// Sum across columns for every row.
pub fn rowsums(frame: &Frame) -> Result<Vec<Scalar>> {
    let cols = frame
        .columns()
        .iter()
        .map(|c| numbers("rowsums", &c.values))
        .collect::<Result<Vec<_>>>()?;
    Ok((0..frame.nrow())
        .map(|i| sum_nums(cols.iter().map(|c| c[i])).into_scalar())
        .collect())
}
