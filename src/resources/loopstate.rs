use bevy_ecs::prelude::Resource;

/// Exit flag of the render loop.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopState {
    pub quit: bool,
}
