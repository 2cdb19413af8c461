//! Convenient re-exports for downstream crates.

pub use crate::config::{Config, EmptyPolicy};
pub use crate::error::{Error, Result};
pub use crate::frame::{Column, Frame};
pub use crate::hash::Hash256;
pub use crate::schema::DataType;
pub use crate::types::{Record, Scalar};
pub use crate::value::{bools, ints, nums, strs, Value};
pub use crate::{values, vector};
