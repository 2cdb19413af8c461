//! Library configuration that host applications can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What recycling does when a zero-length input meets non-empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// Fail with a length error.
    #[default]
    Error,
    /// Every output is empty (R's zero-length arithmetic rule).
    Empty,
}

impl std::str::FromStr for EmptyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(EmptyPolicy::Error),
            "empty" => Ok(EmptyPolicy::Empty),
            other => Err(Error::Config(format!("unknown empty policy '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Zero-length handling in the recycler.
    pub empty_policy: EmptyPolicy,

    /// Absolute tolerance for float comparisons in `is_equal`. Zero means exact.
    pub float_tolerance: f64,

    /// Separator used to collapse inner vectors in `paste`.
    pub collapse: String,

    /// Optional seed for deterministic `sample`/`runif`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_policy: EmptyPolicy::Error,
            float_tolerance: 0.0,
            collapse: ",".to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ARBITRAGE_EMPTY_POLICY`: `error` or `empty`
    /// - `ARBITRAGE_FLOAT_TOLERANCE`: absolute float tolerance
    /// - `ARBITRAGE_COLLAPSE`: paste collapse separator
    /// - `ARBITRAGE_SEED`: random seed
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("ARBITRAGE_EMPTY_POLICY") {
            if let Ok(v) = s.parse::<EmptyPolicy>() {
                cfg.empty_policy = v;
            }
        }

        if let Some(s) = lookup("ARBITRAGE_FLOAT_TOLERANCE") {
            if let Ok(v) = s.parse::<f64>() {
                cfg.float_tolerance = v;
            }
        }

        if let Some(s) = lookup("ARBITRAGE_COLLAPSE") {
            cfg.collapse = s;
        }

        if let Some(s) = lookup("ARBITRAGE_SEED") {
            if let Ok(v) = s.parse::<u64>() {
                cfg.seed = Some(v);
            }
        }

        cfg
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    pub fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.float_tolerance.is_nan() || self.float_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "float_tolerance must be a non-negative number, got {}",
                self.float_tolerance
            )));
        }
        Ok(())
    }
}
