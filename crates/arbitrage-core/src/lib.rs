#![forbid(unsafe_code)]
//! arbitrage-core: the data model shared by every arbitrage operation.
//!
//! - `Scalar`/`Record`: single values, compared by value.
//! - `Value`: the tagged union every operation boundary converts into.
//! - `Frame`: named equal-length columns plus row labels.
//!
//! No operations with algorithmic content live here; see `arbitrage-ops`.

pub mod config;
pub mod error;
pub mod frame;
pub mod hash;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod value;

pub use config::{Config, EmptyPolicy};
pub use error::{Error, Result};
pub use frame::{Column, Frame};
pub use schema::DataType;
pub use types::{Record, Scalar};
pub use value::{bools, ints, nums, strs, Value};
