//! Single values: `Scalar` and the opaque `Record`.
//!
//! Numbers compare by value across `I64`/`F64`, so `1 == 1.0`. Grouping and set
//! operations use `write_key`, which encodes exactly that notion of identity.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::schema::DataType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    /// Missing value (R's `NA`).
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
    /// A composite value treated as one opaque element.
    Record(Record),
}

/// Ordered field-name → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field, replacing the value in place if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Scalar {
    /// Row label / index helper; indices are carried as `I64`.
    pub fn index(i: usize) -> Scalar {
        Scalar::I64(i as i64)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Null => DataType::Null,
            Scalar::Bool(_) => DataType::Boolean,
            Scalar::I64(_) => DataType::Int64,
            Scalar::F64(_) => DataType::Float64,
            Scalar::Str(_) => DataType::Utf8,
            Scalar::Record(_) => DataType::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::I64(v) => Some(*v as f64),
            Scalar::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view; floats qualify only when integral and in range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::I64(v) => Some(*v),
            Scalar::F64(v) => f64_as_i64(*v),
            _ => None,
        }
    }

    /// Logical view: booleans as-is, numbers are true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::I64(v) => Some(*v != 0),
            Scalar::F64(v) => Some(*v != 0.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Append the canonical identity encoding of this value to `out`.
    ///
    /// Two scalars produce the same bytes iff they are the same group value:
    /// integral floats share the integer encoding, `-0.0` is `0`, and every
    /// NaN is one value.
    pub fn write_key(&self, out: &mut Vec<u8>) {
        match self {
            Scalar::Null => out.push(0),
            Scalar::Bool(b) => {
                out.push(1);
                out.push(*b as u8);
            }
            Scalar::I64(v) => {
                out.push(2);
                out.extend_from_slice(&v.to_le_bytes());
            }
            Scalar::F64(v) => match f64_as_i64(*v) {
                Some(i) => {
                    out.push(2);
                    out.extend_from_slice(&i.to_le_bytes());
                }
                None => {
                    let bits = if v.is_nan() {
                        f64::NAN.to_bits()
                    } else {
                        v.to_bits()
                    };
                    out.push(3);
                    out.extend_from_slice(&bits.to_le_bytes());
                }
            },
            Scalar::Str(s) => {
                out.push(4);
                out.extend_from_slice(&(s.len() as u64).to_le_bytes());
                out.extend_from_slice(s.as_bytes());
            }
            Scalar::Record(r) => {
                out.push(5);
                out.extend_from_slice(&(r.len() as u64).to_le_bytes());
                for (name, value) in r.iter() {
                    out.extend_from_slice(&(name.len() as u64).to_le_bytes());
                    out.extend_from_slice(name.as_bytes());
                    value.write_key(out);
                }
            }
        }
    }

    pub fn key(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(9);
        self.write_key(&mut out);
        out
    }

    /// Total order used by `order`/`sort`.
    ///
    /// Nulls sort last, NaN after every other number, mixed types by type rank.
    pub fn total_cmp(&self, other: &Scalar) -> Ordering {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Greater,
            (_, Null) => Ordering::Less,
            (Bool(a), Bool(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Record(a), Record(b)) => record_cmp(a, b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(x), Some(y)) => float_cmp(x, y),
                _ => type_rank(self).cmp(&type_rank(other)),
            },
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (F64(a), F64(b)) => a == b,
            (I64(a), F64(b)) | (F64(b), I64(a)) => f64_as_i64(*b) == Some(*a),
            (Str(a), Str(b)) => a == b,
            (Record(a), Record(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("NA"),
            Scalar::Bool(true) => f.write_str("TRUE"),
            Scalar::Bool(false) => f.write_str("FALSE"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Record(r) => {
                f.write_str("{")?;
                for (i, (name, value)) in r.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<Record> for Scalar {
    fn from(v: Record) -> Self {
        Scalar::Record(v)
    }
}

fn f64_as_i64(v: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if v.is_finite() && v.fract() == 0.0 && v >= -LIMIT && v < LIMIT {
        Some(v as i64)
    } else {
        None
    }
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn record_cmp(a: &Record, b: &Record) -> Ordering {
    for ((na, va), (nb, vb)) in a.iter().zip(b.iter()) {
        match na.cmp(nb).then_with(|| va.total_cmp(vb)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Rank of each type for mixed-type comparisons.
fn type_rank(s: &Scalar) -> u8 {
    match s {
        Scalar::Bool(_) => 0,
        Scalar::I64(_) | Scalar::F64(_) => 1,
        Scalar::Str(_) => 2,
        Scalar::Record(_) => 3,
        Scalar::Null => 4,
    }
}
