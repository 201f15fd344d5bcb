mod buffer;
mod pool;
pub mod queue;
mod writer;

pub use buffer::FrameBuffer;
pub use pool::BufferPool;

use anyhow::{anyhow, bail, Result};
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::capture::{CaptureSource, CaptureStatus};
use crate::shared::constants::{IDLE_QUANTUM, STATS_INTERVAL};
use crate::stats::StatsSnapshot;
use crate::timing::{PacingTimer, RateCounter};
use crate::utils::logger;

pub struct PipelineConfig {
    pub fps: f64,
    pub pool_capacity: usize,
    pub json_stats: bool,
}

pub struct PipelineReport {
    pub frames_captured: u64,
    pub frames_written: u64,
}

/// Run the capture pipeline until `stop` is raised, then drain and return.
///
/// The calling thread is the producer: it paces captures, fills buffers from
/// the source and pushes them onto the queue. A dedicated writer thread pops
/// them and streams the bytes to the sink. Shutdown order: the producer loop
/// exits, its queue sender is dropped (the producer-finished signal), the
/// writer drains everything still queued, and `join` returns only after the
/// last frame hit the sink.
pub fn run(
    mut source: Box<dyn CaptureSource>,
    sink: Box<dyn Write + Send>,
    config: &PipelineConfig,
    stop: Arc<AtomicBool>,
) -> Result<PipelineReport> {
    if !config.fps.is_finite() || config.fps <= 0.0 {
        bail!("fps must be positive and finite (got {})", config.fps);
    }

    let frame_size = source.frame_size();
    let pool = Arc::new(BufferPool::new(frame_size, config.pool_capacity));
    let (tx, rx) = queue::frame_queue();
    let write_fps = Arc::new(AtomicU32::new(0));

    let writer_handle = {
        let pool = Arc::clone(&pool);
        let write_fps = Arc::clone(&write_fps);
        let stop = Arc::clone(&stop);
        thread::spawn(move || writer::run(rx, sink, pool, write_fps, stop))
    };

    let frame_interval = Duration::from_secs_f64(1.0 / config.fps);
    let mut now = Instant::now();
    let mut frame_timer = PacingTimer::new(frame_interval, now);
    let mut stats_timer = PacingTimer::new(STATS_INTERVAL, now);
    let mut capture_rate = RateCounter::new();
    let mut frames_captured = 0u64;
    let mut capture_err = None;

    while !stop.load(Ordering::SeqCst) {
        // One clock sample per tick; both timers compare against it.
        now = Instant::now();

        if stats_timer.is_due(now) {
            StatsSnapshot {
                capture_fps: capture_rate.take(),
                write_fps: write_fps.load(Ordering::Relaxed),
                queue_depth: tx.len(),
                pool_occupancy: pool.occupancy(),
            }
            .report(config.json_stats);
            stats_timer.reset(now);
        }

        if frame_timer.is_due(now) {
            let mut frame = pool.acquire();
            match source.capture_into(&mut frame) {
                Ok(CaptureStatus::Captured) => {
                    tx.push(frame);
                    capture_rate.incr();
                    frames_captured += 1;
                }
                Ok(CaptureStatus::NotReady) => pool.release(frame),
                Err(e) => {
                    // Stop capturing but still drain what is already queued.
                    logger::error(&format!("capture failed: {}", e));
                    pool.release(frame);
                    capture_err = Some(e);
                    break;
                }
            }
            frame_timer.reset(now);
        } else {
            thread::sleep(IDLE_QUANTUM);
        }
    }

    logger::debug(&format!(
        "producer exiting, queue depth {} at shutdown",
        tx.len()
    ));

    // Producer-finished signal: the writer sees the queue close once it is
    // fully drained, so joining here waits for every frame to be written.
    drop(tx);
    let frames_written = writer_handle
        .join()
        .map_err(|_| anyhow!("writer thread panicked"))??;

    match capture_err {
        Some(e) => Err(e),
        None => Ok(PipelineReport {
            frames_captured,
            frames_written,
        }),
    }
}
