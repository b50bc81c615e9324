//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from the loop's clock reading.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record the start of a new frame at `now_ms`.
pub fn update_world_time(world: &mut World, now_ms: u64) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.ticks_ms = now_ms;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time() {
        let mut world = World::new();
        world.insert_resource(WorldTime::starting_at(100));

        update_world_time(&mut world, 116);
        update_world_time(&mut world, 133);

        let wt = *world.resource::<WorldTime>();
        assert_eq!(wt.ticks_ms, 133);
        assert_eq!(wt.frame_count, 2);
    }
}
