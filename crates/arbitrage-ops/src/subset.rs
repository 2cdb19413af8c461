//! Subsetting: `which`, `select`, `filter`.
//!
//! Predicates see one element (or one row record for frames). Index
//! selection copies rows out in the order given, duplicates included.

use arbitrage_core::prelude::*;

use crate::traits::Rows;

/// Positions where `pred` holds.
pub fn which<F>(target: &[Scalar], mut pred: F) -> Vec<usize>
where
    F: FnMut(&Scalar) -> bool,
{
    target
        .iter()
        .enumerate()
        .filter_map(|(i, v)| pred(v).then_some(i))
        .collect()
}

/// Positions `i < min(len(target), len(mask))` where `mask[i]` is true.
///
/// Mismatched lengths truncate to the shorter input; they neither fail nor
/// recycle. Non-logical and null mask entries count as false.
pub fn which_mask(target: &[Scalar], mask: &[Scalar]) -> Vec<usize> {
    target
        .iter()
        .zip(mask)
        .enumerate()
        .filter_map(|(i, (_, m))| matches!(m, Scalar::Bool(true)).then_some(i))
        .collect()
}

/// Re-index `target` by `idx`: reorders, subsets and repeats rows.
pub fn select<T: Rows + ?Sized>(target: &T, idx: &[usize]) -> Result<T::Output> {
    target.take_rows(idx)
}

/// Keep the rows whose value (element, or row record for frames) satisfies `pred`.
pub fn select_if<T, F>(target: &T, mut pred: F) -> Result<T::Output>
where
    T: Rows + ?Sized,
    F: FnMut(&Scalar) -> bool,
{
    let idx: Vec<usize> = (0..target.row_count())
        .filter(|&i| target.row_value(i).map_or(false, |v| pred(&v)))
        .collect();
    target.take_rows(&idx)
}

/// Elements of `x` satisfying `pred`, order preserved.
pub fn filter<F>(x: &[Scalar], mut pred: F) -> Vec<Scalar>
where
    F: FnMut(&Scalar) -> bool,
{
    x.iter().filter(|v| pred(v)).cloned().collect()
}
