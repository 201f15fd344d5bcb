use anyhow::{bail, Context, Result};
use scrap::{Capturer, Display};
use std::io::ErrorKind;

use crate::pipeline::FrameBuffer;
use crate::shared::constants::BYTES_PER_PIXEL;

use super::{CaptureSource, CaptureStatus};

/// Shared-memory display capture backed by `scrap` (XShm on X11).
///
/// Frame geometry comes from the selected display and is fixed for the
/// session. Setup failures are fatal at startup; there is no retry.
pub struct DisplayCapture {
    capturer: Capturer,
    width: usize,
    height: usize,
}

impl DisplayCapture {
    /// Open a capture session on the display at `index` (0 = primary).
    pub fn open(index: usize) -> Result<Self> {
        let mut displays = Display::all().context("listing displays")?;
        if index >= displays.len() {
            bail!(
                "display index {} out of range ({} available)",
                index,
                displays.len()
            );
        }
        let display = displays.remove(index);
        let capturer = Capturer::new(display).context("opening capture session")?;
        let width = capturer.width();
        let height = capturer.height();
        Ok(Self {
            capturer,
            width,
            height,
        })
    }
}

impl CaptureSource for DisplayCapture {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn capture_into(&mut self, buffer: &mut FrameBuffer) -> Result<CaptureStatus> {
        let frame = match self.capturer.frame() {
            Ok(frame) => frame,
            // The backend has no new frame yet; skip this tick.
            Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(CaptureStatus::NotReady),
            Err(e) => return Err(e).context("capturing frame"),
        };
        repack_rows(&frame, self.width, self.height, buffer.as_mut_slice())?;
        Ok(CaptureStatus::Captured)
    }
}

/// Copy one captured frame into `dst`, stripping any row padding so the
/// stream carries no stride and the receiver only needs width/height/format.
///
/// A frame shorter than `width * 4 * height` means the backend is
/// misbehaving; that surfaces as a capture error, not a panic.
fn repack_rows(frame: &[u8], width: usize, height: usize, dst: &mut [u8]) -> Result<()> {
    let row_bytes = width * BYTES_PER_PIXEL;
    if frame.len() < row_bytes * height {
        bail!(
            "backend returned a short frame: {} bytes for {}x{}",
            frame.len(),
            width,
            height
        );
    }

    let stride = frame.len() / height;
    if stride == row_bytes {
        dst.copy_from_slice(&frame[..row_bytes * height]);
    } else {
        for (row, src) in frame.chunks_exact(stride).take(height).enumerate() {
            dst[row * row_bytes..(row + 1) * row_bytes].copy_from_slice(&src[..row_bytes]);
        }
    }
    Ok(())
}
