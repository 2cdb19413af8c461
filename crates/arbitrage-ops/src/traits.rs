//! Shape-polymorphic row access shared by grouping and selection.
//!
//! A sequence and a frame are both "something with rows": grouping and
//! selection only need to count rows and copy a subset of them out.

use arbitrage_core::prelude::*;

/// A collection that can be split or re-indexed row by row.
///
/// Invariants:
/// - `take_rows` returns a new collection of the same shape and never aliases
///   the source.
/// - `take_rows` preserves the order of `idx`, including duplicates.
pub trait Rows {
    type Output;

    /// Element count for sequences, row count for frames.
    fn row_count(&self) -> usize;

    fn take_rows(&self, idx: &[usize]) -> Result<Self::Output>;

    /// Row `i` as a single value (the element itself, or a record for frames).
    fn row_value(&self, i: usize) -> Option<Scalar>;
}

impl Rows for [Scalar] {
    type Output = Vec<Scalar>;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn take_rows(&self, idx: &[usize]) -> Result<Vec<Scalar>> {
        idx.iter()
            .map(|&i| {
                self.get(i).cloned().ok_or(Error::Index {
                    op: "take_rows",
                    index: i,
                    len: self.len(),
                })
            })
            .collect()
    }

    fn row_value(&self, i: usize) -> Option<Scalar> {
        self.get(i).cloned()
    }
}

impl Rows for Vec<Scalar> {
    type Output = Vec<Scalar>;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn take_rows(&self, idx: &[usize]) -> Result<Vec<Scalar>> {
        self.as_slice().take_rows(idx)
    }

    fn row_value(&self, i: usize) -> Option<Scalar> {
        self.get(i).cloned()
    }
}

impl Rows for Frame {
    type Output = Frame;

    fn row_count(&self) -> usize {
        self.nrow()
    }

    fn take_rows(&self, idx: &[usize]) -> Result<Frame> {
        Frame::take_rows(self, idx)
    }

    fn row_value(&self, i: usize) -> Option<Scalar> {
        self.row(i).map(Scalar::Record)
    }
}
