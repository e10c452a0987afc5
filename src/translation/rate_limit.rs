use std::time::{Duration, Instant};

/// Minimum spacing between two live backend calls.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(2);

/// Spaces out outbound backend calls.
///
/// Only live calls are recorded; cached and skipped messages never wait.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Time left before the next call is allowed.
    pub fn remaining(&self) -> Duration {
        self.last_call.map_or(Duration::ZERO, |last| {
            self.min_interval.saturating_sub(last.elapsed())
        })
    }

    /// Blocks the current thread until the next call is allowed.
    ///
    /// Returns how long it waited.
    pub fn wait(&self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            tracing::debug!(wait_ms = remaining.as_millis() as u64, "rate limiting backend call");
            std::thread::sleep(remaining);
        }
        remaining
    }

    /// Records that a live call was just made.
    pub fn record(&mut self) {
        self.last_call = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
