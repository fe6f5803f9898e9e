//! Streaming range queries over an ordered key-value store. A
//! [`stream_engine::range_stream::ReadStream`] traverses an inclusive key
//! range in either direction, delivering one pair at a time with pause/resume
//! flow control and immediate cancellation.

pub mod error;
pub mod storage_engine;
pub mod stream_engine;
