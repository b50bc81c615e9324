//! Millisecond clock used by the render loop and animations.
//!
//! [`SystemClock`] measures real time since it was created and really sleeps.
//! [`ManualClock`] only moves when told to, which makes frame timing
//! deterministic in tests.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Milliseconds since the clock started.
    fn ticks_ms(&self) -> u64;
    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u64);
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn delay_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Clock driven by hand. Delays advance it instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now_ms
    }

    fn delay_ms(&mut self, ms: u64) {
        self.advance(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_only_when_told() {
        let mut clock = ManualClock::new(5);
        assert_eq!(clock.ticks_ms(), 5);
        clock.delay_ms(10);
        clock.advance(1);
        assert_eq!(clock.ticks_ms(), 16);
        clock.set(2);
        assert_eq!(clock.ticks_ms(), 2);
    }

    #[test]
    fn test_system_clock_delay_waits() {
        let mut clock = SystemClock::new();
        let before = clock.ticks_ms();
        clock.delay_ms(5);
        assert!(clock.ticks_ms() >= before + 5);
    }
}
