use arbitrage_core::prelude::*;

use super::{numbers, Num};
use crate::vectorize::vectorize;

fn map_float(op: &'static str, x: Value, f: impl Fn(f64) -> f64) -> Result<Vec<Scalar>> {
    Ok(numbers(op, &vectorize(x))?
        .into_iter()
        .map(|n| n.f64().map_or(Scalar::Null, |v| Scalar::F64(f(v))))
        .collect())
}

/// Integers pass through untouched; floats go through `f`.
fn map_keep_int(op: &'static str, x: Value, f: impl Fn(f64) -> f64) -> Result<Vec<Scalar>> {
    Ok(numbers(op, &vectorize(x))?
        .into_iter()
        .map(|n| match n {
            Num::Float(v) => Scalar::F64(f(v)),
            other => other.into_scalar(),
        })
        .collect())
}

pub fn sqrt(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("sqrt", x.into(), f64::sqrt)
}

pub fn exp(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("exp", x.into(), f64::exp)
}

/// Natural logarithm.
pub fn log(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("log", x.into(), f64::ln)
}

pub fn log10(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("log10", x.into(), f64::log10)
}

pub fn log2(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("log2", x.into(), f64::log2)
}

pub fn sin(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("sin", x.into(), f64::sin)
}

pub fn cos(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("cos", x.into(), f64::cos)
}

pub fn tan(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_float("tan", x.into(), f64::tan)
}

pub fn floor(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_keep_int("floor", x.into(), f64::floor)
}

pub fn ceiling(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    map_keep_int("ceiling", x.into(), f64::ceil)
}

pub fn abs(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(numbers("abs", &vectorize(x))?
        .into_iter()
        .map(|n| match n {
            Num::Int(v) => v.checked_abs().map_or(Scalar::F64((v as f64).abs()), Scalar::I64),
            other => other.f64().map_or(Scalar::Null, |v| Scalar::F64(v.abs())),
        })
        .collect())
}

pub fn negate(x: impl Into<Value>) -> Result<Vec<Scalar>> {
    Ok(numbers("negate", &vectorize(x))?
        .into_iter()
        .map(|n| match n {
            Num::Int(v) => v.checked_neg().map_or(Scalar::F64(-(v as f64)), Scalar::I64),
            other => other.f64().map_or(Scalar::Null, |v| Scalar::F64(-v)),
        })
        .collect())
}

/// Round to `digits` decimal places, ties to even (IEC 60559, as R does).
pub fn round(x: impl Into<Value>, digits: i32) -> Result<Vec<Scalar>> {
    let scale = 10f64.powi(digits);
    map_keep_int("round", x.into(), move |v| {
        if digits == 0 {
            v.round_ties_even()
        } else {
            (v * scale).round_ties_even() / scale
        }
    })
}
