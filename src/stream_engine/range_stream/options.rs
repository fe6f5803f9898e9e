use crate::error::{Error, Result};

/// Options for a range stream. Bounds are inclusive and already encoded; key
/// and value codecs are the caller's concern, the stream only compares encoded
/// bytes. With `reverse`, `start` is the high end of the range and `end` the
/// low end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadOptions {
    /// Key to start traversal at, inclusive. Defaults to the edge of the
    /// keyspace for the traversal direction.
    pub start: Option<Vec<u8>>,
    /// Key to stop traversal at, inclusive.
    pub end: Option<Vec<u8>>,
    /// Traverses from high keys to low keys when true.
    pub reverse: bool,
    /// Maximum number of pairs to deliver.
    pub limit: Option<u64>,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start bound.
    pub fn start(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.start = Some(key.into());
        self
    }

    /// Sets the end bound.
    pub fn end(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.end = Some(key.into());
        self
    }

    /// Sets the traversal direction.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Caps the number of delivered pairs.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validates the options. Streams reject misconfigured ranges at
    /// construction, before any work is scheduled.
    pub fn validate(&self) -> Result<()> {
        for bound in [&self.start, &self.end].into_iter().flatten() {
            if bound.is_empty() {
                return Err(Error::Value("Range bound cannot be empty".into()));
            }
        }
        Ok(())
    }
}
