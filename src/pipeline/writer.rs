use anyhow::{Context, Result};
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::shared::constants::{STATS_INTERVAL, WRITER_POLL};
use crate::timing::{PacingTimer, RateCounter};
use crate::utils::logger;

use super::pool::BufferPool;
use super::queue::{FrameReceiver, PopResult};

/// Writer consumer loop. Runs on its own thread.
///
/// Pops frames in order, writes their bytes verbatim to the sink and returns
/// the buffer to the pool. Exits only when the queue reports `Closed`, i.e.
/// after the producer has stopped AND every queued frame has been written.
/// Returns the number of frames written.
pub(crate) fn run(
    rx: FrameReceiver,
    mut sink: Box<dyn Write + Send>,
    pool: Arc<BufferPool>,
    write_fps: Arc<AtomicU32>,
    stop: Arc<AtomicBool>,
) -> Result<u64> {
    let mut now = Instant::now();
    let mut rate_timer = PacingTimer::new(STATS_INTERVAL, now);
    let mut rate = RateCounter::new();
    let mut total_written = 0u64;

    loop {
        match rx.pop_wait(WRITER_POLL) {
            PopResult::Frame(buffer) => {
                if let Err(e) = sink.write_all(buffer.as_slice()) {
                    // Nothing downstream can take the rest of the stream;
                    // stop the producer instead of queueing frames forever.
                    logger::error(&format!("sink write failed: {}", e));
                    stop.store(true, Ordering::SeqCst);
                    return Err(e).context("writing frame to sink");
                }
                total_written += 1;
                rate.incr();
                pool.release(buffer);
            }
            PopResult::Empty => {}
            PopResult::Closed => break,
        }

        now = Instant::now();
        if rate_timer.is_due(now) {
            write_fps.store(rate.take(), Ordering::Relaxed);
            rate_timer.reset(now);
        }
    }

    sink.flush().context("flushing sink")?;
    logger::debug(&format!("writer exiting, {} frames written", total_written));
    Ok(total_written)
}
