use crate::error::Result;
use crate::storage_engine::key_value_storage::{Cursor, Direction, Pair};
use crate::stream_engine::range_stream::SeekTo;

/// Wraps a raw store cursor for a single range traversal: one open, repeated
/// next() calls in a fixed direction, one close. The adapter owns the cursor
/// handle exclusively and releases it exactly once.
pub struct CursorAdapter {
    cursor: Option<Box<dyn Cursor>>,
    direction: Direction,
    /// The entry found by the opening seek, delivered by the first next().
    pending: Option<Pair>,
}

impl CursorAdapter {
    /// Creates an adapter around an unpositioned cursor.
    pub fn new(cursor: Box<dyn Cursor>, direction: Direction) -> Self {
        Self { cursor: Some(cursor), direction, pending: None }
    }

    /// Positions the cursor at the resolved seek target and stashes the entry
    /// found there, if any.
    ///
    /// Keyed seeks are forward-only: they land on the first key at or after
    /// the target. For reverse traversal this means a start key that does not
    /// exist resolves to the next key greater than it, and iteration proceeds
    /// backward from there. When nothing at all lies at or after the target,
    /// a reverse traversal instead begins at the keyspace maximum, since every
    /// stored key is below the requested start.
    pub fn open(&mut self, seek: &SeekTo) -> Result<()> {
        let cursor = match self.cursor.as_mut() {
            Some(cursor) => cursor,
            None => return Ok(()),
        };
        self.pending = match seek {
            SeekTo::First => cursor.seek_first()?,
            SeekTo::Last => cursor.seek_last()?,
            SeekTo::Key(target) => match cursor.seek(target)? {
                None if self.direction == Direction::Reverse => cursor.seek_last()?,
                entry => entry,
            },
        };
        Ok(())
    }

    /// Returns the next entry in the traversal direction, or None once the
    /// keyspace is exhausted or the adapter has been closed.
    pub fn next(&mut self) -> Result<Option<Pair>> {
        if let Some(pair) = self.pending.take() {
            return Ok(Some(pair));
        }
        match self.cursor.as_mut() {
            Some(cursor) => cursor.step(self.direction),
            None => Ok(None),
        }
    }

    /// Releases the cursor handle. Idempotent; the handle is dropped on the
    /// first call only.
    pub fn close(&mut self) {
        self.pending = None;
        self.cursor.take();
    }
}
