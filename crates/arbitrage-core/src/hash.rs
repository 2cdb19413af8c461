//! Stable content fingerprints for scalars and frames.
//!
//! Used to prove that an operation left its input untouched: fingerprint
//! before, fingerprint after, compare.

use blake3::Hasher;

use crate::frame::Frame;
use crate::types::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash a scalar value into a hasher using its identity encoding.
fn hash_scalar(scalar: &Scalar, buf: &mut Vec<u8>, hasher: &mut Hasher) {
    buf.clear();
    scalar.write_key(buf);
    hasher.update(buf.as_slice());
}

pub fn hash_scalars(values: &[Scalar]) -> Hash256 {
    let mut h = Hasher::new();
    let mut buf = Vec::new();
    h.update(&(values.len() as u64).to_le_bytes());
    for v in values {
        hash_scalar(v, &mut buf, &mut h);
    }
    Hash256(h.finalize().into())
}

impl Frame {
    /// Fingerprint of column names, column contents and row labels.
    pub fn fingerprint(&self) -> Hash256 {
        let mut h = Hasher::new();
        let mut buf = Vec::new();

        h.update(&(self.ncol() as u64).to_le_bytes());
        h.update(&(self.nrow() as u64).to_le_bytes());
        for col in self.columns() {
            h.update(&(col.name.len() as u64).to_le_bytes());
            h.update(col.name.as_bytes());
            for v in &col.values {
                hash_scalar(v, &mut buf, &mut h);
            }
        }
        for r in self.rownames() {
            hash_scalar(r, &mut buf, &mut h);
        }

        Hash256(h.finalize().into())
    }
}
