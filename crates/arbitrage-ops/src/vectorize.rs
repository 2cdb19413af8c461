//! Vectorizer: normalize any input into a flat ordered sequence.

use arbitrage_core::prelude::*;

/// Flatten any value into a sequence.
///
/// - scalars and records become length-1 sequences
/// - sequences pass through unchanged
/// - lists concatenate their inner sequences in order
/// - frames concatenate their columns (column-major)
pub fn vectorize(x: impl Into<Value>) -> Vec<Scalar> {
    match x.into() {
        Value::Scalar(s) => vec![s],
        Value::Vector(v) => v,
        Value::List(l) => l.into_iter().flatten().collect(),
        Value::Frame(f) => f
            .into_columns()
            .into_iter()
            .flat_map(|c| c.values)
            .collect(),
    }
}

/// R's `length`: 1 for scalars, element count for sequences, entry count for
/// lists, column count for frames.
pub fn length(x: impl Into<Value>) -> usize {
    x.into().len()
}
