use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Per-scene presentation settings.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Color the frame is cleared to before anything is drawn.
    pub clear_color: Color,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            clear_color: Color::WHITE,
        }
    }
}
