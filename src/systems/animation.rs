//! Animation system.
//!
//! [`animation`] advances every [`Player`]'s walk cycle from the frame time in
//! [`WorldTime`] and applies the resulting source rectangle to its sprite.
//! Drawing happens later, in the render pass.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::drawable::Animatable;
use crate::resources::worldtime::WorldTime;

/// Advance walk-cycle animations.
///
/// Contract
/// - Reads [`WorldTime::ticks_ms`] as "now".
/// - Calls the [`Animatable`] hook, then ticks the animator with the
///   player's current direction and idle flag.
pub fn animation<T: Send + Sync + 'static>(mut query: Query<&mut Player<T>>, time: Res<WorldTime>) {
    for mut player in query.iter_mut() {
        player.animate();
        player.advance(time.ticks_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::IRect;
    use crate::canvas::recording::MockTexture;
    use crate::components::animation::FrameAnimator;
    use crate::components::sprite::TexturedSprite;

    fn tick(world: &mut World, now_ms: u64) {
        world.resource_mut::<WorldTime>().ticks_ms = now_ms;
        let mut schedule = Schedule::default();
        schedule.add_systems(animation::<MockTexture>);
        schedule.run(world);
    }

    #[test]
    fn test_animation_sets_idle_frame() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let sprite = TexturedSprite::<MockTexture>::from_texture(None, 0, 0, 64, 64);
        let entity = world
            .spawn(Player::new(sprite, FrameAnimator::new(64, 64, 0), 2))
            .id();

        tick(&mut world, 50);
        assert_eq!(world.get::<Player<MockTexture>>(entity).unwrap().sprite.src_rect(), None);

        tick(&mut world, 120);
        assert_eq!(
            world.get::<Player<MockTexture>>(entity).unwrap().sprite.src_rect(),
            Some(IRect::new(0, 128, 64, 64))
        );
    }
}
