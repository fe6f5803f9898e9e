use crate::error::Result;
use crate::storage_engine::key_value_storage::Pair;

/// Traversal direction over the ordered keyspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A positioned handle into the ordered keyspace, supporting single-step
/// advance in either direction. Keyed seeks are forward-only: they land on the
/// first entry at or after the target, never before it. The handle is released
/// by dropping it.
pub trait Cursor: Send {
    /// Positions the cursor at the first entry with key >= target, returning
    /// that entry, or None if no such entry exists.
    fn seek(&mut self, target: &[u8]) -> Result<Option<Pair>>;

    /// Positions the cursor at the first entry in the keyspace.
    fn seek_first(&mut self) -> Result<Option<Pair>>;

    /// Positions the cursor at the last entry in the keyspace.
    fn seek_last(&mut self) -> Result<Option<Pair>>;

    /// Advances one entry in the given direction from the current position,
    /// returning the entry moved to. Returns None if the cursor was never
    /// positioned or the keyspace is exhausted in that direction.
    fn step(&mut self, direction: Direction) -> Result<Option<Pair>>;
}
