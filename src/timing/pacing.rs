use std::time::{Duration, Instant};

/// Deadline/interval timer driving periodic actions.
///
/// The caller samples the clock once per loop tick and passes that `Instant`
/// to `is_due`/`reset`. Due-ness can therefore lag by up to one tick, which
/// is the intended trade against a clock read per check.
#[derive(Debug, Clone, Copy)]
pub struct PacingTimer {
    deadline: Instant,
    interval: Duration,
}

impl PacingTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            deadline: now + interval,
            interval,
        }
    }

    /// True once `now` has reached the deadline.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Start the next interval from `now` (not from the old deadline).
    pub fn reset(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_interval() {
        let start = Instant::now();
        let timer = PacingTimer::new(Duration::from_millis(100), start);

        assert!(!timer.is_due(start));
        assert!(!timer.is_due(start + Duration::from_millis(99)));
    }

    #[test]
    fn test_due_at_and_after_deadline() {
        let start = Instant::now();
        let timer = PacingTimer::new(Duration::from_millis(100), start);

        assert!(timer.is_due(start + Duration::from_millis(100)));
        assert!(timer.is_due(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_reset_rearms_from_now() {
        let start = Instant::now();
        let mut timer = PacingTimer::new(Duration::from_millis(100), start);

        let late = start + Duration::from_millis(250);
        assert!(timer.is_due(late));

        timer.reset(late);
        assert!(!timer.is_due(late));
        assert!(!timer.is_due(late + Duration::from_millis(99)));
        assert!(timer.is_due(late + Duration::from_millis(100)));
    }
}
