//! Recycler: stretch sequences to a common length by cyclic repetition.
//!
//! Output index `i` of an input of length `n` pulls element `i mod n`. Inputs
//! already at the maximum length are passed through untouched.

use arbitrage_core::prelude::*;

use crate::vectorize::vectorize;

/// Recycle every input to the length of the longest one.
///
/// Zero-length inputs next to non-empty ones fail with a length error; use
/// `recycle_with` and `EmptyPolicy::Empty` for R's "everything becomes empty".
pub fn recycle(inputs: Vec<Value>) -> Result<Vec<Vec<Scalar>>> {
    recycle_with(&Config::default(), inputs)
}

pub fn recycle_with(cfg: &Config, inputs: Vec<Value>) -> Result<Vec<Vec<Scalar>>> {
    let vectors = inputs.into_iter().map(vectorize).collect();
    recycle_vectors(cfg, "recycle", vectors)
}

/// Recycle already-vectorized inputs; `op` names the caller in errors.
pub(crate) fn recycle_vectors(
    cfg: &Config,
    op: &'static str,
    vectors: Vec<Vec<Scalar>>,
) -> Result<Vec<Vec<Scalar>>> {
    let target = vectors.iter().map(Vec::len).max().unwrap_or(0);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op,
        inputs = vectors.len(),
        target,
        lengths = ?vectors.iter().map(Vec::len).collect::<Vec<_>>(),
        "recycle"
    );

    if target == 0 {
        return Ok(vectors);
    }

    if vectors.iter().any(Vec::is_empty) {
        return match cfg.empty_policy {
            EmptyPolicy::Error => Err(Error::length(op, target, 0)),
            EmptyPolicy::Empty => Ok(vec![Vec::new(); vectors.len()]),
        };
    }

    Ok(vectors
        .into_iter()
        .map(|v| {
            if v.len() == target {
                v
            } else {
                (0..target).map(|i| v[i % v.len()].clone()).collect()
            }
        })
        .collect())
}

/// Two-input form used by the binary math operations.
pub(crate) fn recycle_pair(
    op: &'static str,
    a: Value,
    b: Value,
) -> Result<(Vec<Scalar>, Vec<Scalar>)> {
    let mut out = recycle_vectors(&Config::default(), op, vec![vectorize(a), vectorize(b)])?;
    let b = out.pop().unwrap_or_default();
    let a = out.pop().unwrap_or_default();
    Ok((a, b))
}
