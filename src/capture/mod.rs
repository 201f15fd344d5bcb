pub mod display;

use anyhow::Result;

use crate::pipeline::FrameBuffer;
use crate::shared::constants::BYTES_PER_PIXEL;

/// Outcome of one capture attempt. `NotReady` is a normal condition (the
/// backend has no new frame yet), never an error.
pub enum CaptureStatus {
    Captured,
    NotReady,
}

/// Source of raw pixel frames.
///
/// Geometry is fixed for the lifetime of a session, so the byte size per
/// frame is known up front and the pool can size every buffer to it.
pub trait CaptureSource {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Bytes per packed frame for this session.
    fn frame_size(&self) -> usize {
        self.width() * self.height() * BYTES_PER_PIXEL
    }

    /// Fill `buffer` with one frame of raw pixel bytes. The buffer is
    /// exactly `frame_size()` bytes.
    fn capture_into(&mut self, buffer: &mut FrameBuffer) -> Result<CaptureStatus>;
}
