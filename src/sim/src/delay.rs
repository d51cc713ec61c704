//! Delay that never sleeps.

use ps2term_hal::Delay;

/// Counts requested delays instead of waiting.
#[derive(Debug, Default)]
pub struct SimDelay {
    calls: usize,
    total_ms: u64,
}

impl SimDelay {
    /// Create a delay with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `delay_ms` calls made.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Sum of all requested milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }
}

impl Delay for SimDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);
    }
}
