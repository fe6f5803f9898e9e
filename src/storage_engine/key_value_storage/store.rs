use crate::error::Result;
use crate::storage_engine::key_value_storage::Cursor;
use std::fmt::Display;

/// A write operation within a batch.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Put { key: Vec<u8>, value: Vec<u8> },
    Delete { key: Vec<u8> },
}

/// Key-value storage backend. Keys are ordered lexicographically on their
/// encoded byte representation, and cursors observe that order.
pub trait KvStore: Display + Send + Sync {
    /// Fetches a value for a key, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Sets a value for a key, replacing any existing value.
    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()>;

    /// Deletes a key, doing nothing if it does not exist.
    fn delete(&mut self, key: &[u8]) -> Result<()>;

    /// Flushes any buffered data to the underlying medium.
    fn flush(&mut self) -> Result<()>;

    /// Applies a batch of write operations in order.
    fn batch(&mut self, operations: Vec<Operation>) -> Result<()> {
        for operation in operations {
            match operation {
                Operation::Put { key, value } => self.set(&key, value)?,
                Operation::Delete { key } => self.delete(&key)?,
            }
        }
        Ok(())
    }

    /// Opens an unpositioned cursor over the keyspace.
    fn cursor(&self) -> Result<Box<dyn Cursor>>;
}
