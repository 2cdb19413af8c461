#![forbid(unsafe_code)]
//! arbitrage: R-style vectorized data wrangling.
//!
//! Values of any shape (scalar, sequence, nested sequence, frame) are
//! normalized by `vectorize`, stretched to a common length by `recycle`,
//! grouped by `partition`/`tapply`/`by`, counted by `table` and subset by
//! `which`/`select`.
//!
//! ```
//! use arbitrage::prelude::*;
//!
//! let sales = ints([3, 5, 2, 7]);
//! let region = strs(["n", "s", "n", "s"]);
//! let totals = tapply(&sales, &region, |g| sum(g)).unwrap();
//! assert_eq!(totals, ints([5, 12]));
//! ```

pub use arbitrage_core as base;
pub use arbitrage_ops as ops;

pub mod prelude {
    pub use arbitrage_core::prelude::*;
    pub use arbitrage_ops::*;
}
