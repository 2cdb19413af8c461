//! Grouping engine: `partition`, `split`, `tapply`, `by`.
//!
//! Groups are ordered by the first occurrence of their key value, scanning the
//! key left to right. Within a group, rows keep their original order. Keys are
//! never recycled: the key length must equal the target's row count.

mod index;

pub use index::GroupIndex;

use arbitrage_core::prelude::*;

use crate::traits::Rows;
use crate::vectorize::vectorize;

fn build_index<T: Rows + ?Sized>(op: &'static str, target: &T, key: Value) -> Result<GroupIndex> {
    let key = vectorize(key);
    let rows = target.row_count();
    if key.len() != rows {
        return Err(Error::length(op, rows, key.len()));
    }

    let index = GroupIndex::build(&key);

    #[cfg(feature = "tracing")]
    tracing::trace!(op, rows, groups = index.len(), "partition");

    Ok(index)
}

/// Split `target` into one sub-collection per distinct key value.
///
/// Sequences yield sub-sequences; frames yield sub-frames that keep every
/// column and the row labels of their rows. `target` is only read.
pub fn partition<T: Rows + ?Sized>(target: &T, key: impl Into<Value>) -> Result<Vec<T::Output>> {
    let index = build_index("partition", target, key.into())?;
    index
        .buckets()
        .iter()
        .map(|rows| target.take_rows(rows))
        .collect()
}

/// Like `partition`, but each group is paired with its key value.
pub fn split<T: Rows + ?Sized>(
    target: &T,
    key: impl Into<Value>,
) -> Result<Vec<(Scalar, T::Output)>> {
    let index = build_index("split", target, key.into())?;
    index
        .levels()
        .iter()
        .zip(index.buckets())
        .map(|(level, rows)| Ok((level.clone(), target.take_rows(rows)?)))
        .collect()
}

/// Apply a reduction to every group of `values`; one result per group.
///
/// `values` is a single column; reduce a whole frame with `by`.
pub fn tapply<R, F>(values: &[Scalar], key: impl Into<Value>, mut f: F) -> Result<Vec<R>>
where
    F: FnMut(&[Scalar]) -> Result<R>,
{
    let index = build_index("tapply", values, key.into())?;
    let mut bucket = Vec::new();
    index
        .buckets()
        .iter()
        .map(|rows| {
            bucket.clear();
            bucket.extend(rows.iter().map(|&i| values[i].clone()));
            f(&bucket)
        })
        .collect()
}

/// Apply `f` to every group of `target`; `f` owns each sub-collection and
/// may return anything, including a modified copy of it.
pub fn by<T, R, F>(target: &T, key: impl Into<Value>, mut f: F) -> Result<Vec<R>>
where
    T: Rows + ?Sized,
    F: FnMut(T::Output) -> Result<R>,
{
    partition(target, key)?.into_iter().map(&mut f).collect()
}
