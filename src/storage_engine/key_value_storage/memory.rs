use crate::error::Result;
use crate::storage_engine::key_value_storage::{Cursor, Direction, KvStore, Pair};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Bound;
use std::sync::{Arc, RwLock};

/// In-memory key-value store backed by a sorted map, guarded by an RwLock to
/// support multiple cursors across it.
pub struct Memory {
    entries: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "memory")
    }
}

impl Memory {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self { entries: Arc::new(RwLock::new(BTreeMap::new())) }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for Memory {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read()?.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        self.entries.write()?.insert(key.to_vec(), value);
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.entries.write()?.remove(key);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn cursor(&self) -> Result<Box<dyn Cursor>> {
        Ok(Box::new(MemoryCursor::new(self.entries.clone())))
    }
}

/// Cursor over the sorted map. Rather than holding a map iterator, it tracks
/// the key of the entry it is positioned on and finds neighbours with range
/// lookups, so writes made while the cursor is open never invalidate it.
pub struct MemoryCursor {
    entries: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
    /// The key last returned, or None while unpositioned.
    position: Option<Vec<u8>>,
}

impl MemoryCursor {
    fn new(entries: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>) -> Self {
        Self { entries, position: None }
    }

    fn position_at(&mut self, pair: Option<Pair>) -> Option<Pair> {
        if let Some(pair) = &pair {
            self.position = Some(pair.key.clone());
        }
        pair
    }
}

impl Cursor for MemoryCursor {
    fn seek(&mut self, target: &[u8]) -> Result<Option<Pair>> {
        let entries = self.entries.read()?;
        let pair = entries
            .range::<[u8], _>((Bound::Included(target), Bound::Unbounded))
            .next()
            .map(|(key, value)| Pair::new(key.clone(), value.clone()));
        drop(entries);
        // A failed seek leaves the cursor unpositioned.
        self.position = pair.as_ref().map(|pair| pair.key.clone());
        Ok(pair)
    }

    fn seek_first(&mut self) -> Result<Option<Pair>> {
        let entries = self.entries.read()?;
        let pair =
            entries.iter().next().map(|(key, value)| Pair::new(key.clone(), value.clone()));
        drop(entries);
        Ok(self.position_at(pair))
    }

    fn seek_last(&mut self) -> Result<Option<Pair>> {
        let entries = self.entries.read()?;
        let pair =
            entries.iter().next_back().map(|(key, value)| Pair::new(key.clone(), value.clone()));
        drop(entries);
        Ok(self.position_at(pair))
    }

    fn step(&mut self, direction: Direction) -> Result<Option<Pair>> {
        let position = match &self.position {
            Some(position) => position.clone(),
            None => return Ok(None),
        };
        let entries = self.entries.read()?;
        let pair = match direction {
            Direction::Forward => entries
                .range::<[u8], _>((Bound::Excluded(position.as_slice()), Bound::Unbounded))
                .next(),
            Direction::Reverse => entries
                .range::<[u8], _>((Bound::Unbounded, Bound::Excluded(position.as_slice())))
                .next_back(),
        }
        .map(|(key, value)| Pair::new(key.clone(), value.clone()));
        drop(entries);
        // Past either end the position stays put, so further steps in the same
        // direction keep returning None.
        Ok(self.position_at(pair))
    }
}
