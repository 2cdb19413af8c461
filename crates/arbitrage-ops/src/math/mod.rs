//! Elementwise arithmetic, unary math, reductions and frame margins.
//!
//! Logical values count as 0/1. Nulls propagate through elementwise and
//! running operations; reductions over a null yield null.

mod aggregate;
mod binary;
mod unary;

pub use aggregate::{
    colsums, cummax, cummin, cumprod, cumsum, diff, inner_product, max, maxdiff, mean, min, prod,
    rowsums, sum,
};
pub use binary::{add, divide, modulo, multiply, pow, subtract};
pub use unary::{
    abs, ceiling, cos, exp, floor, log, log10, log2, negate, round, sin, sqrt, tan,
};

use arbitrage_core::prelude::*;

/// A scalar viewed as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Num {
    Na,
    Int(i64),
    Float(f64),
}

impl Num {
    pub(crate) fn of(op: &'static str, s: &Scalar) -> Result<Num> {
        match s {
            Scalar::Null => Ok(Num::Na),
            Scalar::Bool(b) => Ok(Num::Int(*b as i64)),
            Scalar::I64(v) => Ok(Num::Int(*v)),
            Scalar::F64(v) => Ok(Num::Float(*v)),
            other => Err(Error::Type {
                op,
                expected: "numeric",
                actual: other.data_type(),
            }),
        }
    }

    pub(crate) fn f64(self) -> Option<f64> {
        match self {
            Num::Na => None,
            Num::Int(v) => Some(v as f64),
            Num::Float(v) => Some(v),
        }
    }

    pub(crate) fn into_scalar(self) -> Scalar {
        match self {
            Num::Na => Scalar::Null,
            Num::Int(v) => Scalar::I64(v),
            Num::Float(v) => Scalar::F64(v),
        }
    }
}

pub(crate) fn numbers(op: &'static str, x: &[Scalar]) -> Result<Vec<Num>> {
    x.iter().map(|s| Num::of(op, s)).collect()
}
