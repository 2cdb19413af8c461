//! Tabular structure: named equal-length columns plus row labels.
//!
//! Invariant (checked by every constructor and mutator): all columns have the
//! same length and `rownames.len()` equals that length. Fields are private so
//! the invariant cannot be broken from outside.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Record, Scalar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Scalar>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
    rownames: Vec<Scalar>,
}

/// Default row labels `0..n-1`.
pub fn default_rownames(n: usize) -> Vec<Scalar> {
    (0..n).map(Scalar::index).collect()
}

/// Make `names` distinct, keeping the first occurrence of each.
///
/// Later duplicates get `.1`, `.2`, ... appended, skipping any name already
/// taken: `["a", "a", "b"]` becomes `["a", "a.1", "b"]`.
pub fn unique_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut taken = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            let name: String = name.into();
            let mut candidate = name.clone();
            let mut n = 0;
            while taken.contains(&candidate) {
                n += 1;
                candidate = format!("{name}.{n}");
            }
            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

impl Frame {
    /// Build a frame; `rownames` defaults to `0..n-1`.
    pub fn new(columns: Vec<Column>, rownames: Option<Vec<Scalar>>) -> Result<Self> {
        let nrow = match (columns.first(), rownames.as_ref()) {
            (Some(c), _) => c.len(),
            (None, Some(r)) => r.len(),
            (None, None) => 0,
        };

        for col in &columns {
            if col.len() != nrow {
                return Err(Error::length("dataframe", nrow, col.len()));
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == col.name) {
                return Err(Error::invalid(
                    "dataframe",
                    format!("duplicate column name '{}'", col.name),
                ));
            }
        }

        let rownames = match rownames {
            Some(r) if r.len() != nrow => return Err(Error::length("rownames", nrow, r.len())),
            Some(r) => r,
            None => default_rownames(nrow),
        };

        Ok(Self { columns, rownames })
    }

    /// Build a frame from unnamed columns; names default to `"0".."n-1"`.
    pub fn from_columns(values: Vec<Vec<Scalar>>) -> Result<Self> {
        let columns = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Column::new(i.to_string(), v))
            .collect();
        Self::new(columns, None)
    }

    pub fn nrow(&self) -> usize {
        self.rownames.len()
    }

    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn colnames(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn rownames(&self) -> &[Scalar] {
        &self.rownames
    }

    /// True when the row labels are exactly `0..n-1`.
    pub fn has_default_rownames(&self) -> bool {
        self.rownames
            .iter()
            .enumerate()
            .all(|(i, r)| matches!(r, Scalar::I64(v) if *v == i as i64))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    pub fn column_at(&self, idx: usize) -> Result<&Column> {
        self.columns.get(idx).ok_or(Error::Index {
            op: "column_at",
            index: idx,
            len: self.columns.len(),
        })
    }

    /// Replace the values of an existing column (length must match).
    pub fn replace_column(&mut self, name: &str, values: Vec<Scalar>) -> Result<()> {
        if values.len() != self.nrow() {
            return Err(Error::length("replace_column", self.nrow(), values.len()));
        }
        let idx = self
            .position(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        self.columns[idx].values = values;
        Ok(())
    }

    /// Append a new column (length must match, name must be unused).
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Scalar>) -> Result<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(Error::invalid(
                "push_column",
                format!("duplicate column name '{name}'"),
            ));
        }
        if values.len() != self.nrow() {
            // An empty frame takes its shape from the first column.
            if self.ncol() > 0 || self.nrow() > 0 {
                return Err(Error::length("push_column", self.nrow(), values.len()));
            }
            self.rownames = default_rownames(values.len());
        }
        self.columns.push(Column::new(name, values));
        Ok(())
    }

    pub fn with_rownames(mut self, rownames: Vec<Scalar>) -> Result<Self> {
        if rownames.len() != self.nrow() {
            return Err(Error::length("rownames", self.nrow(), rownames.len()));
        }
        self.rownames = rownames;
        Ok(self)
    }

    /// Row `i` as a record of column name → value.
    pub fn row(&self, i: usize) -> Option<Record> {
        if i >= self.nrow() {
            return None;
        }
        let mut record = Record::new();
        for col in &self.columns {
            record.insert(col.name.clone(), col.values[i].clone());
        }
        Some(record)
    }

    /// New frame holding rows `idx` in the given order (duplicates allowed).
    ///
    /// Row labels travel with their rows; the result never aliases `self`.
    pub fn take_rows(&self, idx: &[usize]) -> Result<Frame> {
        let n = self.nrow();
        if let Some(&bad) = idx.iter().find(|&&i| i >= n) {
            return Err(Error::Index {
                op: "take_rows",
                index: bad,
                len: n,
            });
        }

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: idx.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();
        let rownames = idx.iter().map(|&i| self.rownames[i].clone()).collect();

        Ok(Frame { columns, rownames })
    }

    /// Concatenate two frames side-by-side.
    ///
    /// Row counts must match. Columns of `right` whose name already exists in
    /// `left` get a `_right` suffix. Row labels come from `left`.
    pub fn concat(left: &Frame, right: &Frame) -> Result<Frame> {
        if left.nrow() != right.nrow() {
            return Err(Error::length("cbind", left.nrow(), right.nrow()));
        }

        let mut columns = Vec::with_capacity(left.ncol() + right.ncol());
        columns.extend(left.columns.iter().cloned());

        for col in &right.columns {
            let mut new_col = col.clone();
            while columns.iter().any(|c: &Column| c.name == new_col.name) {
                new_col.name = format!("{}_right", new_col.name);
            }
            columns.push(new_col);
        }

        Ok(Frame {
            columns,
            rownames: left.rownames.clone(),
        })
    }
}
