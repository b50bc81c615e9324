//! Walk-cycle timing for a row-per-direction sprite sheet.
//!
//! The sheet has one row per [`Direction`] (row index = direction value) and
//! [`FRAME_COUNT`] columns of equally sized frames. [`FrameAnimator`] only
//! tracks time and frame index; the caller applies the returned source
//! rectangle to whatever sprite it drives.

use crate::canvas::IRect;
use crate::components::player::Direction;

/// Columns per sheet row.
pub const FRAME_COUNT: i32 = 9;
/// Default time between frame advances.
pub const DEFAULT_ANIMATION_SPEED_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAnimator {
    frame_width: i32,
    frame_height: i32,
    frame_count: i32,
    current_frame: i32,
    animation_speed_ms: u64,
    last_frame_time_ms: u64,
}

impl FrameAnimator {
    /// New animator on frame 0. `now_ms` counts as the last advance, so the
    /// first tick that does anything comes one period later.
    pub fn new(frame_width: i32, frame_height: i32, now_ms: u64) -> Self {
        Self {
            frame_width,
            frame_height,
            frame_count: FRAME_COUNT,
            current_frame: 0,
            animation_speed_ms: DEFAULT_ANIMATION_SPEED_MS,
            last_frame_time_ms: now_ms,
        }
    }

    pub fn with_speed(mut self, animation_speed_ms: u64) -> Self {
        self.animation_speed_ms = animation_speed_ms;
        self
    }

    /// Advance the animation if more than one period has elapsed.
    ///
    /// Returns the source rectangle to show, or `None` when it is not time
    /// yet. While idle the animator freezes on column 0 of the direction's
    /// row and keeps its frame index.
    pub fn tick(&mut self, now_ms: u64, direction: Direction, idle: bool) -> Option<IRect> {
        if now_ms.saturating_sub(self.last_frame_time_ms) <= self.animation_speed_ms {
            return None;
        }

        let row_y = direction.row() * self.frame_height;
        let rect = if idle {
            IRect::new(0, row_y, self.frame_width, self.frame_height)
        } else {
            self.current_frame = (self.current_frame + 1) % self.frame_count;
            IRect::new(
                self.current_frame * self.frame_width,
                row_y,
                self.frame_width,
                self.frame_height,
            )
        };

        self.last_frame_time_ms = now_ms;
        Some(rect)
    }

    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    pub fn frame_count(&self) -> i32 {
        self.frame_count
    }

    pub fn animation_speed_ms(&self) -> u64 {
        self.animation_speed_ms
    }

    pub fn last_frame_time_ms(&self) -> u64 {
        self.last_frame_time_ms
    }

    /// `(width, height)` of one frame.
    pub fn frame_size(&self) -> (i32, i32) {
        (self.frame_width, self.frame_height)
    }
}
