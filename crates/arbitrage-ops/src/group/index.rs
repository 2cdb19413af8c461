//! Insertion-ordered group index.
//!
//! Distinct values live in a `Vec` in first-occurrence order; a `HashMap`
//! from identity bytes to position gives O(1) lookup. Iteration order never
//! depends on hash order.

use std::collections::HashMap;

use arbitrage_core::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    levels: Vec<Scalar>,
    buckets: Vec<Vec<usize>>,
    codes: Vec<usize>,
    lookup: HashMap<Vec<u8>, usize>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every position of `key`.
    pub fn build(key: &[Scalar]) -> Self {
        let mut index = Self::new();
        let mut buf = Vec::new();
        for value in key {
            index.push_with(value, &mut buf);
        }
        index
    }

    /// Append the next position with group value `value`; returns its group id.
    pub fn push(&mut self, value: &Scalar) -> usize {
        let mut buf = Vec::new();
        self.push_with(value, &mut buf)
    }

    fn push_with(&mut self, value: &Scalar, buf: &mut Vec<u8>) -> usize {
        buf.clear();
        value.write_key(buf);

        let row = self.codes.len();
        let group = match self.lookup.get(buf.as_slice()) {
            Some(&g) => g,
            None => {
                let g = self.levels.len();
                self.lookup.insert(buf.clone(), g);
                self.levels.push(value.clone());
                self.buckets.push(Vec::new());
                g
            }
        };
        self.buckets[group].push(row);
        self.codes.push(group);
        group
    }

    /// Group id of `value`, if it has been seen.
    pub fn group_of(&self, value: &Scalar) -> Option<usize> {
        self.lookup.get(value.key().as_slice()).copied()
    }

    pub fn contains(&self, value: &Scalar) -> bool {
        self.group_of(value).is_some()
    }

    /// Distinct values in first-occurrence order.
    pub fn levels(&self) -> &[Scalar] {
        &self.levels
    }

    /// Row positions per group, in group order; each bucket is ascending.
    pub fn buckets(&self) -> &[Vec<usize>] {
        &self.buckets
    }

    /// Group id of every indexed position.
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn into_levels(self) -> Vec<Scalar> {
        self.levels
    }
}
