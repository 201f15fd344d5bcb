mod capture;
mod pipeline;
mod shared;
mod stats;
mod timing;
mod utils;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::capture::display::DisplayCapture;
use crate::capture::CaptureSource;
use crate::pipeline::PipelineConfig;
use crate::shared::constants;
use crate::utils::logger;

/// Capture a display at a paced rate and stream raw BGRA frames to a byte
/// sink. The stream carries no per-frame header; the receiver needs the
/// width/height/format logged at startup.
#[derive(Parser)]
#[command(name = constants::APP_NAME, version, about, long_about = None)]
struct Cli {
    /// Display index to capture (0 = primary)
    #[arg(short, long, default_value_t = 0)]
    display: usize,

    /// Target capture rate in frames per second
    #[arg(short, long, default_value_t = constants::DEFAULT_FPS)]
    fps: f64,

    /// Maximum number of recycled frame buffers kept in the pool
    #[arg(short, long, default_value_t = constants::DEFAULT_POOL_CAPACITY)]
    pool_capacity: usize,

    /// Output path for the raw stream ("-" writes to stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Emit the per-second stats line as JSON
    #[arg(long, default_value_t = false)]
    json_stats: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if cli.fps <= 0.0 {
        bail!("--fps must be positive");
    }
    if cli.pool_capacity == 0 {
        bail!("--pool-capacity must be at least 1");
    }

    let source = DisplayCapture::open(cli.display)?;
    logger::info(&format!(
        "capturing display {}: {}x{} BGRA, {} bytes/frame at {} fps",
        cli.display,
        source.width(),
        source.height(),
        source.frame_size(),
        cli.fps
    ));

    let sink: Box<dyn Write + Send> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("creating output file {}", cli.output))?;
        Box::new(file)
    };

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        // Only raise the flag; the pipeline handles the drain itself.
        handler_stop.store(true, Ordering::SeqCst);
    })
    .context("installing SIGINT handler")?;

    let config = PipelineConfig {
        fps: cli.fps,
        pool_capacity: cli.pool_capacity,
        json_stats: cli.json_stats,
    };
    let report = pipeline::run(Box::new(source), sink, &config, stop)?;

    logger::info(&format!(
        "captured {} frames, wrote {}",
        report.frames_captured, report.frames_written
    ));
    Ok(())
}
