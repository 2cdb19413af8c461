//! `Value`: the discriminated union accepted at every operation boundary.
//!
//! Callers hand scalars, vectors, nested vectors or frames to any operation;
//! the `From` impls below are the only place that shape is decided.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::types::{Record, Scalar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Scalar(Scalar),
    Vector(Vec<Scalar>),
    /// One level of nesting: matrices (row-major), partitions, products.
    List(Vec<Vec<Scalar>>),
    Frame(Frame),
}

impl Value {
    /// R's `length`: elements for vectors, entries for lists, columns for frames.
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Vector(v) => v.len(),
            Value::List(l) => l.len(),
            Value::Frame(f) => f.ncol(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            Value::Frame(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Vec<Scalar>]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

/// Capture a variadic, mixed-type argument list as a vector of scalars.
///
/// ```
/// use arbitrage_core::{vector, Scalar};
/// let args = vector![1, 2, "a"];
/// assert_eq!(args, vec![Scalar::I64(1), Scalar::I64(2), Scalar::Str("a".into())]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        ::std::vec::Vec::<$crate::Scalar>::new()
    };
    ($($x:expr),+ $(,)?) => {
        ::std::vec![$($crate::Scalar::from($x)),+]
    };
}

/// Build a `Vec<Value>` from heterogeneous inputs (for n-ary operations).
///
/// ```
/// use arbitrage_core::{values, ints, Value};
/// let args = values![ints([1, 2]), 10];
/// assert_eq!(args[1], Value::from(10));
/// ```
#[macro_export]
macro_rules! values {
    ($($x:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::from($x)),*]
    };
}

pub fn ints<I: IntoIterator<Item = i64>>(xs: I) -> Vec<Scalar> {
    xs.into_iter().map(Scalar::I64).collect()
}

pub fn nums<I: IntoIterator<Item = f64>>(xs: I) -> Vec<Scalar> {
    xs.into_iter().map(Scalar::F64).collect()
}

pub fn bools<I: IntoIterator<Item = bool>>(xs: I) -> Vec<Scalar> {
    xs.into_iter().map(Scalar::Bool).collect()
}

pub fn strs<I, S>(xs: I) -> Vec<Scalar>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    xs.into_iter().map(|s| Scalar::Str(s.into())).collect()
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<&Scalar> for Value {
    fn from(v: &Scalar) -> Self {
        Value::Scalar(v.clone())
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(v: Vec<Scalar>) -> Self {
        Value::Vector(v)
    }
}

impl From<&[Scalar]> for Value {
    fn from(v: &[Scalar]) -> Self {
        Value::Vector(v.to_vec())
    }
}

impl From<&Vec<Scalar>> for Value {
    fn from(v: &Vec<Scalar>) -> Self {
        Value::Vector(v.clone())
    }
}

impl From<Vec<Vec<Scalar>>> for Value {
    fn from(v: Vec<Vec<Scalar>>) -> Self {
        Value::List(v)
    }
}

impl From<&Vec<Vec<Scalar>>> for Value {
    fn from(v: &Vec<Vec<Scalar>>) -> Self {
        Value::List(v.clone())
    }
}

impl From<Frame> for Value {
    fn from(v: Frame) -> Self {
        Value::Frame(v)
    }
}

impl From<&Frame> for Value {
    fn from(v: &Frame) -> Self {
        Value::Frame(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

macro_rules! value_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }

            impl From<Vec<$t>> for Value {
                fn from(v: Vec<$t>) -> Self {
                    Value::Vector(v.into_iter().map(Scalar::from).collect())
                }
            }

            impl<const N: usize> From<[$t; N]> for Value {
                fn from(v: [$t; N]) -> Self {
                    Value::Vector(v.into_iter().map(Scalar::from).collect())
                }
            }
        )*
    };
}

value_from_primitive!(bool, i64, f64, &str, String, Record);
