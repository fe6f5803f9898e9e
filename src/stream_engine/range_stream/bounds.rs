use crate::storage_engine::key_value_storage::Direction;
use crate::stream_engine::range_stream::ReadOptions;

/// Where a cursor is initially positioned for a range traversal.
#[derive(Clone, Debug, PartialEq)]
pub enum SeekTo {
    /// The lexicographic minimum of the keyspace.
    First,
    /// The lexicographic maximum of the keyspace.
    Last,
    /// The first key at or after the given key. The seek primitive is
    /// forward-only, so this is the target for both directions; reverse
    /// traversal begins at the found key and proceeds backward from it.
    Key(Vec<u8>),
}

/// A user-supplied range resolved into concrete traversal terms: a seek
/// target, a direction, and an inclusive stop bound.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRange {
    pub seek: SeekTo,
    pub direction: Direction,
    pub end: Option<Vec<u8>>,
    pub limit: Option<u64>,
}

impl ResolvedRange {
    /// Resolves stream options. An absent start bound seeks to the physical
    /// end of the keyspace appropriate for the direction.
    pub fn resolve(options: &ReadOptions) -> Self {
        let direction = if options.reverse { Direction::Reverse } else { Direction::Forward };
        let seek = match (&options.start, direction) {
            (Some(key), _) => SeekTo::Key(key.clone()),
            (None, Direction::Forward) => SeekTo::First,
            (None, Direction::Reverse) => SeekTo::Last,
        };
        Self { seek, direction, end: options.end.clone(), limit: options.limit }
    }

    /// Whether a key is inside the end bound for the traversal direction. The
    /// bound is inclusive; if it names a key that does not exist, the nearest
    /// in-range key still passes. An absent bound never stops the scan.
    pub fn contains(&self, key: &[u8]) -> bool {
        match (&self.end, self.direction) {
            (Some(end), Direction::Forward) => key <= end.as_slice(),
            (Some(end), Direction::Reverse) => key >= end.as_slice(),
            (None, _) => true,
        }
    }
}
