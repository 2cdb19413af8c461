//! Aggregator: frequency counts and cross tabulation.

use serde::{Deserialize, Serialize};

use arbitrage_core::frame::unique_names;
use arbitrage_core::prelude::*;

use crate::group::GroupIndex;
use crate::vectorize::vectorize;

/// Occurrence count per distinct value, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counts {
    levels: Vec<Scalar>,
    counts: Vec<i64>,
}

impl Counts {
    pub fn levels(&self) -> &[Scalar] {
        &self.levels
    }

    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    /// Count of `value`, matched by grouping identity (so `1` finds `1.0` and NaN finds NaN).
    pub fn get(&self, value: &Scalar) -> Option<i64> {
        let key = value.key();
        self.levels
            .iter()
            .position(|l| l.key() == key)
            .map(|i| self.counts[i])
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Scalar, i64)> {
        self.levels.iter().zip(self.counts.iter().copied())
    }

    /// Two-column frame (`level`, `count`), one row per level.
    pub fn to_frame(&self) -> Result<Frame> {
        Frame::new(
            vec![
                Column::new("level", self.levels.clone()),
                Column::new("count", self.counts.iter().map(|&c| Scalar::I64(c)).collect()),
            ],
            None,
        )
    }
}

/// Count occurrences of each distinct value of `key`.
pub fn table(key: impl Into<Value>) -> Counts {
    let index = GroupIndex::build(&vectorize(key));

    #[cfg(feature = "tracing")]
    tracing::trace!(rows = index.codes().len(), levels = index.len(), "table");

    let counts = index.buckets().iter().map(|b| b.len() as i64).collect();
    Counts {
        levels: index.into_levels(),
        counts,
    }
}

/// Cross-tabulate two keys.
///
/// Rows are the distinct values of `key1`, columns the distinct values of
/// `key2` (both in first-occurrence order). Columns are named by the value's
/// display form, with `.1`, `.2`, ... added when two levels print alike.
/// Absent combinations count zero.
pub fn table2(key1: impl Into<Value>, key2: impl Into<Value>) -> Result<Frame> {
    let key1 = vectorize(key1);
    let key2 = vectorize(key2);
    if key1.len() != key2.len() {
        return Err(Error::length("table", key1.len(), key2.len()));
    }

    let rows = GroupIndex::build(&key1);
    let cols = GroupIndex::build(&key2);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        positions = key1.len(),
        rows = rows.len(),
        cols = cols.len(),
        "table2"
    );

    let mut cells = vec![vec![0i64; rows.len()]; cols.len()];
    for (&r, &c) in rows.codes().iter().zip(cols.codes()) {
        cells[c][r] += 1;
    }

    let names = unique_names(cols.levels().iter().map(ToString::to_string));
    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, counts)| Column::new(name, counts.into_iter().map(Scalar::I64).collect()))
        .collect();

    Frame::new(columns, Some(rows.into_levels()))
}
