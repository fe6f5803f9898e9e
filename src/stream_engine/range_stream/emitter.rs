use log::{debug, error};
use crate::stream_engine::range_stream::{
    Control, CursorAdapter, ResolvedRange, StreamEvent, StreamState,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Drives a range stream: pulls pairs from the cursor adapter one at a time,
/// applies the end bound and limit, and emits events to the consumer subject
/// to pause/resume and cancellation.
///
/// The emitter runs as its own task and owns all stream state, so transitions
/// are serialized and at most one read is ever in flight. The event channel
/// has capacity one, which is what makes the consumer's pace the stream's
/// pace.
pub struct Emitter {
    adapter: CursorAdapter,
    range: ResolvedRange,
    event_tx: mpsc::Sender<StreamEvent>,
    control_rx: mpsc::UnboundedReceiver<Control>,
    /// Set once by destroy(), never cleared. Checked before issuing a read and
    /// before emitting a pending result.
    cancel: CancellationToken,
    /// Shared with the stream handle; cleared on any terminal transition.
    readable: Arc<AtomicBool>,
    state: StreamState,
    paused: bool,
    emitted: u64,
}

impl Emitter {
    pub fn new(
        adapter: CursorAdapter,
        range: ResolvedRange,
        event_tx: mpsc::Sender<StreamEvent>,
        control_rx: mpsc::UnboundedReceiver<Control>,
        cancel: CancellationToken,
        readable: Arc<AtomicBool>,
    ) -> Self {
        Self {
            adapter,
            range,
            event_tx,
            control_rx,
            cancel,
            readable,
            state: StreamState::Idle,
            paused: false,
            emitted: 0,
        }
    }

    /// Runs the stream to completion, then performs the single terminal
    /// transition.
    pub async fn drive(mut self) {
        debug!("Starting range stream emitter");
        let exhausted = self.run().await;
        self.finish(exhausted).await;
    }

    /// Opens the cursor and emits events until the stream terminates. Returns
    /// true on natural exhaustion (end bound, limit, or end of keyspace) and
    /// false on cancellation, which suppresses the end event.
    async fn run(&mut self) -> bool {
        self.state = StreamState::Opening;
        // The seek happens off the constructor's call stack, so a destroy()
        // issued right after construction wins against the open.
        tokio::task::yield_now().await;
        self.apply_controls();
        if self.cancel.is_cancelled() {
            return false;
        }
        if let Err(err) = self.adapter.open(&self.range.seek) {
            error!("Range stream failed to open its cursor: {}", err);
            return false;
        }
        self.state = StreamState::Reading;
        if !self.send(StreamEvent::Ready).await {
            return false;
        }
        loop {
            self.apply_controls();
            if self.paused && !self.wait_resumed().await {
                return false;
            }
            // Cancellation check before issuing the next read.
            if self.cancel.is_cancelled() {
                return false;
            }
            if let Some(limit) = self.range.limit {
                if self.emitted >= limit {
                    return true;
                }
            }
            let pair = match self.adapter.next() {
                Ok(Some(pair)) => pair,
                Ok(None) => return true,
                Err(err) => {
                    error!("Range stream read failed: {}", err);
                    return false;
                }
            };
            tokio::task::yield_now().await;
            self.apply_controls();
            // Cancellation check before emitting the pending result. A pause
            // is deliberately not checked here: a read already in flight is
            // always delivered.
            if self.cancel.is_cancelled() {
                return false;
            }
            if !self.range.contains(&pair.key) {
                return true;
            }
            if !self.send(StreamEvent::Data(pair)).await {
                return false;
            }
            self.emitted += 1;
        }
    }

    /// Applies any queued control requests. Repeated pauses and resumes
    /// collapse; only the latest request matters.
    fn apply_controls(&mut self) {
        while let Ok(control) = self.control_rx.try_recv() {
            match control {
                Control::Pause => self.paused = true,
                Control::Resume => self.paused = false,
            }
        }
    }

    /// Parks until a resume arrives. Returns false if the stream was destroyed
    /// or the handle dropped while paused, in which case nobody can resume it.
    async fn wait_resumed(&mut self) -> bool {
        debug!("Pausing range stream after {} pairs", self.emitted);
        self.state = StreamState::Paused;
        while self.paused {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return false,
                control = self.control_rx.recv() => match control {
                    Some(Control::Resume) => self.paused = false,
                    Some(Control::Pause) => {}
                    None => return false,
                },
            }
        }
        debug!("Resuming range stream");
        self.state = StreamState::Reading;
        true
    }

    /// Sends an event, yielding to consumer backpressure. Returns false if
    /// delivery became impossible because the stream was destroyed or the
    /// consumer went away; a result discarded this way is never re-sent.
    async fn send(&mut self, event: StreamEvent) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            sent = self.event_tx.send(event) => sent.is_ok(),
        }
    }

    /// The terminal transition: releases the cursor, flips the status flags,
    /// and emits end (on natural exhaustion only) and close. Every exit path
    /// funnels through drive(), which calls this exactly once after run()
    /// returns; a second terminal transition has no code path that could
    /// reach it.
    async fn finish(&mut self, exhausted: bool) {
        debug!("Range stream ending from {:?}", self.state);
        self.state = StreamState::Ending;
        self.adapter.close();
        self.readable.store(false, Ordering::SeqCst);
        if exhausted {
            let _ = self.event_tx.send(StreamEvent::End).await;
        }
        let _ = self.event_tx.send(StreamEvent::Close).await;
        self.state = StreamState::Closed;
        debug!("Range stream closed after {} pairs", self.emitted);
    }
}
