use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use super::buffer::FrameBuffer;

/// Outcome of a bounded wait on the frame queue.
pub enum PopResult {
    Frame(FrameBuffer),
    /// Nothing arrived within the wait; the producer is still running.
    Empty,
    /// The producer hung up and every queued frame has been handed out.
    Closed,
}

/// FIFO handoff between the capture loop and the writer.
///
/// Backed by an unbounded channel, so `push` never blocks the paced capture
/// loop and ordering is strict: the Nth frame pushed is the Nth popped.
/// Dropping the sender is the producer-finished signal; the receiver keeps
/// yielding frames until the queue is drained and only then reports
/// `Closed`, which is the drain-before-exit guarantee.
///
/// Queue length is deliberately unbounded. If the sink stalls, depth grows
/// and pool occupancy falls to zero; both are visible in the stats line.
pub fn frame_queue() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = unbounded();
    (FrameSender { tx }, FrameReceiver { rx })
}

pub struct FrameSender {
    tx: Sender<FrameBuffer>,
}

impl FrameSender {
    /// Append a frame at the tail. If the writer is already gone the frame
    /// is dropped; the stop flag will be observed on the next loop tick.
    pub fn push(&self, buffer: FrameBuffer) {
        let _ = self.tx.send(buffer);
    }

    /// Snapshot of the queue depth, for diagnostics.
    pub fn len(&self) -> usize {
        self.tx.len()
    }
}

pub struct FrameReceiver {
    rx: Receiver<FrameBuffer>,
}

impl FrameReceiver {
    /// Wait up to `timeout` for the next frame.
    pub fn pop_wait(&self, timeout: Duration) -> PopResult {
        match self.rx.recv_timeout(timeout) {
            Ok(buffer) => PopResult::Frame(buffer),
            Err(RecvTimeoutError::Timeout) => PopResult::Empty,
            Err(RecvTimeoutError::Disconnected) => PopResult::Closed,
        }
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }
}
