/// Per-interval event counter for the capture/write rate stats.
///
/// `take` returns the tally and restarts it, so the count can never carry
/// over an interval boundary or go negative.
#[derive(Debug, Default)]
pub struct RateCounter {
    count: u32,
}

impl RateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr(&mut self) {
        self.count += 1;
    }

    /// Return the current count and reset it to zero.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets_count() {
        let mut counter = RateCounter::new();
        counter.incr();
        counter.incr();
        counter.incr();

        assert_eq!(counter.take(), 3);
        assert_eq!(counter.take(), 0);

        counter.incr();
        assert_eq!(counter.take(), 1);
    }
}
