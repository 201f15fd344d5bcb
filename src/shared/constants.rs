use std::time::Duration;

pub const APP_NAME: &str = "rawcast";

/// Packed BGRA, matching what the display capture backend hands us.
pub const BYTES_PER_PIXEL: usize = 4;

pub const DEFAULT_FPS: f64 = 30.0;
pub const DEFAULT_POOL_CAPACITY: usize = 30;

/// Sleep quantum for the producer when the frame timer is not due yet.
pub const IDLE_QUANTUM: Duration = Duration::from_millis(1);

/// How long the writer waits on the queue before re-checking its rate timer.
pub const WRITER_POLL: Duration = Duration::from_millis(50);

/// Stats are reported once per interval on stderr.
pub const STATS_INTERVAL: Duration = Duration::from_secs(1);
