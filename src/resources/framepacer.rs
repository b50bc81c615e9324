use log::warn;

use super::clock::Clock;

pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Fixed frame budget: the loop sleeps away whatever a frame did not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_delay_ms: u64,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

impl FramePacer {
    /// Budget of `1000 / fps` ms (truncated). An fps of 0 falls back to
    /// [`DEFAULT_TARGET_FPS`].
    pub fn new(target_fps: u32) -> Self {
        let fps = if target_fps == 0 {
            warn!("target_fps of 0 is invalid, using {}", DEFAULT_TARGET_FPS);
            DEFAULT_TARGET_FPS
        } else {
            target_fps
        };
        Self {
            frame_delay_ms: 1000 / u64::from(fps),
        }
    }

    pub fn frame_delay_ms(&self) -> u64 {
        self.frame_delay_ms
    }

    /// Time left in the frame that started at `frame_start_ms`, or `None`
    /// when the budget is used up.
    pub fn remaining(&self, frame_start_ms: u64, now_ms: u64) -> Option<u64> {
        let frame_time = now_ms.saturating_sub(frame_start_ms);
        (frame_time < self.frame_delay_ms).then(|| self.frame_delay_ms - frame_time)
    }

    /// Sleep on `clock` for the rest of the frame. Returns the time slept.
    pub fn pace<C: Clock>(&self, clock: &mut C, frame_start_ms: u64) -> u64 {
        match self.remaining(frame_start_ms, clock.ticks_ms()) {
            Some(ms) => {
                clock.delay_ms(ms);
                ms
            }
            None => 0,
        }
    }
}
