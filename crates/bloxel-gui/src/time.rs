use std::time::{Duration, Instant};

/// Timing for one host frame.
///
/// `total` is a monotonic clock measured from an arbitrary start point; caret
/// blinking compares against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    pub total: Duration,
    pub delta: Duration,
}

impl FrameTime {
    pub fn new(total: Duration, delta: Duration) -> Self {
        Self { total, delta }
    }
}

/// Wall-clock frame timer for hosts without their own game clock.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Advance to a new frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let time = FrameTime {
            total: now - self.start,
            delta: now - self.last,
        };
        self.last = now;
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
