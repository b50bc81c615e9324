use bevy_ecs::prelude::Resource;

/// Frame time shared with systems, in whole milliseconds.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldTime {
    /// Clock reading at the start of the current frame.
    pub ticks_ms: u64,
    /// Frames drawn so far.
    pub frame_count: u64,
}

impl WorldTime {
    pub fn starting_at(ticks_ms: u64) -> Self {
        Self {
            ticks_ms,
            ..Self::default()
        }
    }
}
