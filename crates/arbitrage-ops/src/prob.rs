//! Random sampling. Deterministic when `Config::seed` is set.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use arbitrage_core::prelude::*;

use crate::vectorize::vectorize;

fn rng(cfg: &Config) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `size` elements of `x`.
///
/// Without replacement each position is drawn at most once, so `size` may not
/// exceed `length(x)`.
pub fn sample(x: impl Into<Value>, size: usize, replace: bool, cfg: &Config) -> Result<Vec<Scalar>> {
    let mut x = vectorize(x);
    let mut rng = rng(cfg);

    if replace {
        if x.is_empty() && size > 0 {
            return Err(Error::invalid("sample", "cannot draw from an empty sequence"));
        }
        return Ok((0..size)
            .map(|_| x[rng.gen_range(0..x.len())].clone())
            .collect());
    }

    if size > x.len() {
        return Err(Error::invalid(
            "sample",
            format!(
                "cannot take a sample of {size} larger than the population of {} without replacement",
                x.len()
            ),
        ));
    }
    let (picked, _) = x.partial_shuffle(&mut rng, size);
    Ok(picked.to_vec())
}

/// `n` uniform doubles in `[min, max)`.
pub fn runif(n: usize, min: f64, max: f64, cfg: &Config) -> Result<Vec<Scalar>> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(Error::invalid("runif", format!("invalid range [{min}, {max})")));
    }
    if min == max {
        return Ok(nums(std::iter::repeat(min).take(n)));
    }
    let mut rng = rng(cfg);
    Ok(nums((0..n).map(|_| rng.gen_range(min..max))))
}
