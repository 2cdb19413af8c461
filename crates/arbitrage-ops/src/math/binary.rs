//! Recycled elementwise arithmetic.

use arbitrage_core::prelude::*;

use super::{numbers, Num};
use crate::recycle::recycle_pair;

fn zip_with<F>(op: &'static str, a: Value, b: Value, f: F) -> Result<Vec<Scalar>>
where
    F: Fn(Num, Num) -> Num,
{
    let (a, b) = recycle_pair(op, a, b)?;
    let (a, b) = (numbers(op, &a)?, numbers(op, &b)?);
    Ok(a.into_iter()
        .zip(b)
        .map(|(x, y)| f(x, y).into_scalar())
        .collect())
}

/// Integer arithmetic stays integral; overflow falls back to floats.
fn int_or_float(
    x: Num,
    y: Num,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Num {
    match (x, y) {
        (Num::Na, _) | (_, Num::Na) => Num::Na,
        (Num::Int(a), Num::Int(b)) => match int(a, b) {
            Some(v) => Num::Int(v),
            None => Num::Float(float(a as f64, b as f64)),
        },
        _ => match (x.f64(), y.f64()) {
            (Some(a), Some(b)) => Num::Float(float(a, b)),
            _ => Num::Na,
        },
    }
}

fn float_only(x: Num, y: Num, float: fn(f64, f64) -> f64) -> Num {
    match (x.f64(), y.f64()) {
        (Some(a), Some(b)) => Num::Float(float(a, b)),
        _ => Num::Na,
    }
}

pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("add", a.into(), b.into(), |x, y| {
        int_or_float(x, y, i64::checked_add, |a, b| a + b)
    })
}

pub fn subtract(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("subtract", a.into(), b.into(), |x, y| {
        int_or_float(x, y, i64::checked_sub, |a, b| a - b)
    })
}

pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("multiply", a.into(), b.into(), |x, y| {
        int_or_float(x, y, i64::checked_mul, |a, b| a * b)
    })
}

/// Always floating point; division by zero gives infinities or NaN.
pub fn divide(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("divide", a.into(), b.into(), |x, y| float_only(x, y, |a, b| a / b))
}

pub fn pow(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("pow", a.into(), b.into(), |x, y| float_only(x, y, f64::powf))
}

/// Remainder with the sign of the divisor (R's `%%`).
///
/// Integer modulo by zero is null; float modulo by zero is NaN.
pub fn modulo(a: impl Into<Value>, b: impl Into<Value>) -> Result<Vec<Scalar>> {
    zip_with("modulo", a.into(), b.into(), |x, y| match (x, y) {
        (Num::Int(_), Num::Int(0)) => Num::Na,
        _ => int_or_float(
            x,
            y,
            |a, b| a.checked_rem(b).map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r }),
            |a, b| a - (a / b).floor() * b,
        ),
    })
}
