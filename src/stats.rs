use serde::Serialize;

use crate::utils::logger;

/// Periodic diagnostics, informational only. Reported on stderr so the raw
/// stream on stdout stays clean.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsSnapshot {
    pub capture_fps: u32,
    pub write_fps: u32,
    pub queue_depth: usize,
    pub pool_occupancy: usize,
}

impl StatsSnapshot {
    pub fn report(&self, json: bool) {
        if json {
            match serde_json::to_string(self) {
                Ok(line) => logger::info(&line),
                Err(e) => logger::error(&format!("stats serialization failed: {}", e)),
            }
        } else {
            logger::info(&format!(
                "capture fps: {}  queue: {}  write fps: {}  pool: {}",
                self.capture_fps, self.queue_depth, self.write_fps, self.pool_occupancy
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_all_fields() {
        let snapshot = StatsSnapshot {
            capture_fps: 30,
            write_fps: 29,
            queue_depth: 2,
            pool_occupancy: 5,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"capture_fps\":30"));
        assert!(json.contains("\"write_fps\":29"));
        assert!(json.contains("\"queue_depth\":2"));
        assert!(json.contains("\"pool_occupancy\":5"));
    }
}
