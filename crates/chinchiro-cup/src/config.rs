//! Startup configuration for a dice cup.

use std::time::Duration;

/// Time between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Total shaking time before the dice settle.
pub const ROLL_DURATION: Duration = Duration::from_millis(800);

/// Configuration for a dice cup.
#[derive(Debug, Clone)]
pub struct CupConfig {
    /// RNG seed for reproducible throws; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Time between animation frames.
    pub frame_interval: Duration,
    /// Total shaking time.
    pub duration: Duration,
}

impl Default for CupConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval: FRAME_INTERVAL,
            duration: ROLL_DURATION,
        }
    }
}

impl CupConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the frame interval and total duration.
    pub fn with_timing(mut self, frame_interval: Duration, duration: Duration) -> Self {
        self.frame_interval = frame_interval;
        self.duration = duration;
        self
    }

    /// Settle immediately: a single frame and no waiting.
    pub fn instant(self) -> Self {
        self.with_timing(Duration::ZERO, Duration::ZERO)
    }

    /// Number of frames thrown per roll, the last being the result.
    ///
    /// `ceil(duration / frame_interval)`, and never less than one.
    pub fn frame_count(&self) -> u32 {
        if self.frame_interval.is_zero() {
            return 1;
        }
        let interval = self.frame_interval.as_nanos();
        let frames = self.duration.as_nanos().div_ceil(interval);
        u32::try_from(frames).unwrap_or(u32::MAX).max(1)
    }
}
