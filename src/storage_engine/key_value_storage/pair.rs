use serde::{Deserialize, Serialize};

/// A key/value pair, the unit delivered to range stream consumers. Keys and
/// values are opaque byte sequences; any encoding has already been applied,
/// and keys order lexicographically on their encoded representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Pair {
    /// Creates a pair from anything byte-like.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}
