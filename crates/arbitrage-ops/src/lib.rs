#![forbid(unsafe_code)]
//! arbitrage-ops: R-style vectorized operations over `arbitrage-core` values.
//!
//! Design intent:
//! - Every entry point converts its inputs into `Value` once, at the boundary.
//! - Elementwise n-ary operations go through the recycler before applying.
//! - Grouping is index based: a `GroupIndex` records first-occurrence order and
//!   row buckets, and sub-collections are built from it with `Rows::take_rows`.
//! - Pure and synchronous. Inputs are borrowed and never mutated; every result
//!   is a fresh allocation.

pub mod frame;
pub mod functional;
pub mod group;
pub mod math;
pub mod prob;
pub mod recycle;
pub mod sequence;
pub mod sets;
pub mod subset;
pub mod table;
pub mod traits;
pub mod vectorize;

pub use frame::{
    cbind, colnames, dataframe, is_dataframe, is_matrix, ncol, nrow, rbind, rownames, t,
    FrameOptions,
};
pub use functional::{accumulate, expand_grid, fold, mapply, paste, paste_with, reduce, zip};
pub use group::{by, partition, split, tapply, GroupIndex};
pub use math::{
    abs, add, ceiling, colsums, cos, cummax, cummin, cumprod, cumsum, diff, divide, exp, floor,
    inner_product, log, log10, log2, max, maxdiff, mean, min, modulo, multiply, negate, pow,
    prod, round, rowsums, sin, sqrt, subtract, sum, tan,
};
pub use prob::{runif, sample};
pub use recycle::{recycle, recycle_with};
pub use sequence::{order, rep, rep_each, rev, seq, seq_by, seq_range, sort, unique};
pub use sets::{
    all, any, cartesian_product, intersection, is_equal, is_equal_cols, is_equal_with, setdiff,
    union, within,
};
pub use subset::{filter, select, select_if, which, which_mask};
pub use table::{table, table2, Counts};
pub use traits::Rows;
pub use vectorize::{length, vectorize};
