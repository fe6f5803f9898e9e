/// Lifecycle of a range stream. Owned exclusively by the emitter; transitions
/// are serialized even though reads are asynchronous.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StreamState {
    /// Constructed, the open has not been scheduled yet.
    Idle,
    /// The cursor is being positioned; no data may be delivered yet.
    Opening,
    /// Reads are being issued, one in flight at a time.
    Reading,
    /// Paused; no new reads are issued until resumed.
    Paused,
    /// Terminal events are being delivered and the cursor released.
    Ending,
    /// Inert. No further event can fire.
    Closed,
}
