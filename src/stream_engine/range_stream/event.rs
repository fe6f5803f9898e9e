use crate::storage_engine::key_value_storage::Pair;

/// An event delivered to the stream consumer. Ordering is guaranteed: `Ready`
/// precedes the first `Data`, `End` precedes `Close`, and `Close` is terminal
/// and fires exactly once per stream.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamEvent {
    /// The cursor is positioned. Fires at most once, never after destroy().
    Ready,
    /// One in-range pair, in traversal order.
    Data(Pair),
    /// The range was exhausted naturally. Never fires on a destroyed stream.
    End,
    /// The stream is closed and inert.
    Close,
}

/// Flow-control requests from the stream handle to the emitter. Cancellation
/// is not a control message; it travels through the cancellation token so it
/// takes effect even while the emitter is parked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Pause,
    Resume,
}
