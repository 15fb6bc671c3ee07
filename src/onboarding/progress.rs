use std::time::{Duration, Instant};

const STEP_PERCENT: u8 = 10;

/// Fake progress bar: +10% every `tick`, capped at 100%.
///
/// Used for the simulated photo upload and the simulated analysis.
#[derive(Debug, Clone, Copy)]
pub struct TickProgress {
    started: Instant,
    tick: Duration,
}

impl TickProgress {
    pub fn start(tick: Duration) -> Self {
        Self {
            started: Instant::now(),
            tick,
        }
    }

    pub fn percent(&self) -> u8 {
        Self::percent_after(self.started.elapsed(), self.tick)
    }

    pub fn is_done(&self) -> bool {
        self.percent() >= 100
    }

    pub fn percent_after(elapsed: Duration, tick: Duration) -> u8 {
        if tick.is_zero() {
            return 100;
        }
        let ticks = elapsed.as_nanos() / tick.as_nanos();
        ticks.saturating_mul(STEP_PERCENT as u128).min(100) as u8
    }
}
