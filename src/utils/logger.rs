use lazy_static::lazy_static;
use std::sync::Mutex;

/// Levels in increasing verbosity. Lines at or below the configured
/// maximum are emitted.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Level {
    Error,
    Info,
    Debug,
}

lazy_static! {
    static ref MAX_LEVEL: Mutex<Level> = Mutex::new(Level::Info);
}

/// Configure verbosity. Call once at startup, before the pipeline runs.
pub fn init(verbose: bool) {
    let level = if verbose { Level::Debug } else { Level::Info };
    *MAX_LEVEL.lock().unwrap() = level;
}

// Everything goes to stderr: stdout is reserved for the raw pixel stream.
fn log(level: Level, tag: &str, msg: &str) {
    if level <= *MAX_LEVEL.lock().unwrap() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        eprintln!("[{}][{}] {}", timestamp, tag, msg);
    }
}

pub fn info(msg: &str) {
    log(Level::Info, "INFO", msg);
}

pub fn error(msg: &str) {
    log(Level::Error, "ERROR", msg);
}

pub fn debug(msg: &str) {
    log(Level::Debug, "DEBUG", msg);
}
