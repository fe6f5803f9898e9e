use log::debug;
use crate::error::Result;
use crate::storage_engine::key_value_storage::KvStore;
use crate::stream_engine::range_stream::{
    Control, CursorAdapter, Emitter, ReadOptions, ResolvedRange, StreamEvent,
};
use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

/// A streaming range query over an ordered key-value store.
///
/// Construction spawns an emitter task that traverses the configured range
/// and delivers [`StreamEvent`]s through this handle, which implements
/// [`Stream`]. The event channel holds at most one event, so a consumer that
/// stops polling stops the traversal.
///
/// `pause()`, `resume()` and `destroy()` are idempotent, callable from any
/// state, and silent no-ops once the stream has closed. A pause requested
/// while a read is in flight may let a bounded handful of additional pairs
/// through before taking effect; destroy() is the one operation that discards
/// an in-flight result.
pub struct ReadStream {
    events: ReceiverStream<StreamEvent>,
    control_tx: mpsc::UnboundedSender<Control>,
    cancel: CancellationToken,
    readable: Arc<AtomicBool>,
    destroyed: AtomicBool,
    closed: AtomicBool,
}

impl ReadStream {
    /// Opens a range stream over the given store. Misconfigured options are
    /// rejected here, before any work is scheduled or any event can fire.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(store: &dyn KvStore, options: ReadOptions) -> Result<Self> {
        options.validate()?;
        debug!("Opening range stream over {} with {:?}", store, options);
        let range = ResolvedRange::resolve(&options);
        let adapter = CursorAdapter::new(store.cursor()?, range.direction);
        let (event_tx, event_rx) = mpsc::channel(1);
        let (control_tx, control_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let readable = Arc::new(AtomicBool::new(true));
        let emitter =
            Emitter::new(adapter, range, event_tx, control_rx, cancel.clone(), readable.clone());
        tokio::spawn(emitter.drive());
        Ok(Self {
            events: ReceiverStream::new(event_rx),
            control_tx,
            cancel,
            readable,
            destroyed: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        })
    }

    /// Stops new reads from being issued. The result of a read already in
    /// flight is still delivered.
    pub fn pause(&self) {
        let _ = self.control_tx.send(Control::Pause);
    }

    /// Resumes delivery of the remaining in-range pairs.
    pub fn resume(&self) {
        let _ = self.control_tx.send(Control::Resume);
    }

    /// Cancels the stream. Any in-flight read is discarded, the cursor is
    /// released, and the only further event is a single close. A no-op if the
    /// stream already closed naturally.
    pub fn destroy(&self) {
        if self.closed.load(Ordering::SeqCst) || self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        debug!("Destroying range stream");
        self.readable.store(false, Ordering::SeqCst);
        self.cancel.cancel();
    }

    /// Whether the stream can still deliver events. True from construction
    /// until close or destroy.
    pub fn readable(&self) -> bool {
        self.readable.load(Ordering::SeqCst)
    }

    /// Always false; a range stream only reads.
    pub fn writable(&self) -> bool {
        false
    }
}

impl Stream for ReadStream {
    type Item = StreamEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<StreamEvent>> {
        loop {
            return match Pin::new(&mut self.events).poll_next(cx) {
                Poll::Ready(Some(event)) => {
                    // Results that were still buffered when destroy() hit are
                    // dropped; only the terminal close gets through.
                    if self.destroyed.load(Ordering::SeqCst) && event != StreamEvent::Close {
                        continue;
                    }
                    if event == StreamEvent::Close {
                        self.closed.store(true, Ordering::SeqCst);
                        self.readable.store(false, Ordering::SeqCst);
                    }
                    Poll::Ready(Some(event))
                }
                other => other,
            };
        }
    }
}

impl Drop for ReadStream {
    /// An abandoned stream must not leak its emitter task or cursor.
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
