//! Frame and matrix helpers: construction, labels, shape, transpose, binding.
//!
//! A matrix is a `Value::List` of equal-length rows (row-major).

use arbitrage_core::frame::{default_rownames, unique_names};
use arbitrage_core::prelude::*;

use crate::vectorize::vectorize;

/// Optional labels for `dataframe`.
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
    pub colnames: Option<Vec<String>>,
    pub rownames: Option<Vec<Scalar>>,
}

/// Build a frame from one input per column.
///
/// Columns are named `0..n-1` unless `colnames` is given; a frame input
/// contributes its columns unchanged. All columns must have equal length.
pub fn dataframe(columns: Vec<Value>, opts: FrameOptions) -> Result<Frame> {
    let mut cols = Vec::new();
    for value in columns {
        match value {
            Value::Frame(f) => cols.extend(f.into_columns()),
            Value::List(l) => cols.extend(l.into_iter().map(|v| Column::new(String::new(), v))),
            other => cols.push(Column::new(String::new(), vectorize(other))),
        }
    }

    match opts.colnames {
        Some(names) => {
            if names.len() != cols.len() {
                return Err(Error::length("dataframe", cols.len(), names.len()));
            }
            for (col, name) in cols.iter_mut().zip(names) {
                col.name = name;
            }
        }
        None => {
            for (i, col) in cols.iter_mut().enumerate() {
                if col.name.is_empty() {
                    col.name = i.to_string();
                }
            }
        }
    }

    Frame::new(cols, opts.rownames)
}

pub fn is_dataframe(x: &Value) -> bool {
    matches!(x, Value::Frame(_))
}

/// Non-empty list whose rows all share one length.
pub fn is_matrix(x: &Value) -> bool {
    match x {
        Value::List(rows) => match rows.first() {
            Some(first) => rows.iter().all(|r| r.len() == first.len()),
            None => false,
        },
        _ => false,
    }
}

pub fn rownames(x: &Value) -> Option<Vec<Scalar>> {
    x.as_frame().map(|f| f.rownames().to_vec())
}

pub fn colnames(x: &Value) -> Option<Vec<String>> {
    x.as_frame().map(Frame::colnames)
}

pub fn nrow(x: &Value) -> Option<usize> {
    match x {
        Value::Frame(f) => Some(f.nrow()),
        Value::List(rows) if is_matrix(x) => Some(rows.len()),
        _ => None,
    }
}

pub fn ncol(x: &Value) -> Option<usize> {
    match x {
        Value::Frame(f) => Some(f.ncol()),
        Value::List(rows) if is_matrix(x) => rows.first().map(Vec::len),
        _ => None,
    }
}

fn transpose(rows: &[Vec<Scalar>]) -> Vec<Vec<Scalar>> {
    let width = rows.first().map_or(0, Vec::len);
    (0..width)
        .map(|j| rows.iter().map(|r| r[j].clone()).collect())
        .collect()
}

/// Transpose.
///
/// Matrices swap rows and columns. Frames do too, with row labels becoming
/// column names (made unique with `.1`, `.2`, ... when labels repeat) and
/// column names becoming row labels. A plain vector becomes a one-row matrix.
pub fn t(x: &Value) -> Result<Value> {
    match x {
        Value::List(rows) => {
            if !rows.is_empty() && !is_matrix(x) {
                return Err(Error::invalid("t", "rows have different lengths"));
            }
            Ok(Value::List(transpose(rows)))
        }
        Value::Frame(f) => {
            let rows: Vec<Vec<Scalar>> = f.columns().iter().map(|c| c.values.clone()).collect();
            let names = unique_names(f.rownames().iter().map(ToString::to_string));
            let columns = transpose(&rows)
                .into_iter()
                .zip(names)
                .map(|(values, name)| Column::new(name, values))
                .collect();
            let labels = f.colnames().into_iter().map(Scalar::Str).collect();
            Ok(Value::Frame(Frame::new(columns, Some(labels))?))
        }
        Value::Vector(v) => Ok(Value::List(vec![v.clone()])),
        Value::Scalar(s) => Ok(Value::List(vec![vec![s.clone()]])),
    }
}

/// Stack `bottom` under `top`; columns are matched by name.
pub fn rbind(top: &Frame, bottom: &Frame) -> Result<Frame> {
    if top.ncol() != bottom.ncol() {
        return Err(Error::length("rbind", top.ncol(), bottom.ncol()));
    }

    let mut columns = Vec::with_capacity(top.ncol());
    for col in top.columns() {
        let other = bottom.column(&col.name)?;
        let mut values = col.values.clone();
        values.extend(other.values.iter().cloned());
        columns.push(Column::new(col.name.clone(), values));
    }

    let rownames = if top.has_default_rownames() && bottom.has_default_rownames() {
        default_rownames(top.nrow() + bottom.nrow())
    } else {
        top.rownames()
            .iter()
            .chain(bottom.rownames())
            .cloned()
            .collect()
    };

    Frame::new(columns, Some(rownames))
}

/// Bind inputs side by side, in argument order.
///
/// Frames keep their columns; any other input becomes one column named by its
/// argument position, recycled to the row count. The row count is that of the
/// first frame, or the longest input when there is none. Row labels come from
/// the first frame. Conflicting names get a `_right` suffix.
pub fn cbind(inputs: Vec<Value>) -> Result<Frame> {
    let labels = inputs
        .iter()
        .find_map(|v| v.as_frame().map(|f| f.rownames().to_vec()));
    let nrow = match &labels {
        Some(l) => l.len(),
        None => inputs.iter().map(|v| vectorize(v).len()).max().unwrap_or(0),
    };

    let mut bound: Option<Frame> = None;
    for (i, value) in inputs.into_iter().enumerate() {
        let piece = match value {
            Value::Frame(f) => f,
            other => {
                let values = recycle_to(vectorize(other), nrow)?;
                Frame::new(vec![Column::new(i.to_string(), values)], None)?
            }
        };
        bound = Some(match bound {
            Some(acc) => Frame::concat(&acc, &piece)?,
            None => piece,
        });
    }

    match (bound, labels) {
        (Some(frame), Some(labels)) => frame.with_rownames(labels),
        (Some(frame), None) => Ok(frame),
        (None, _) => Frame::new(Vec::new(), None),
    }
}

fn recycle_to(values: Vec<Scalar>, n: usize) -> Result<Vec<Scalar>> {
    if values.len() == n {
        return Ok(values);
    }
    if values.is_empty() || values.len() > n {
        return Err(Error::length("cbind", n, values.len()));
    }
    Ok((0..n).map(|i| values[i % values.len()].clone()).collect())
}
