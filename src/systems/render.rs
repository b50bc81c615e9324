use bevy_ecs::prelude::*;

use crate::canvas::Canvas;
use crate::components::player::Player;
use crate::components::shape::Shape;
use crate::drawable::Drawable;
use crate::resources::stage::Stage;

/// Clear the frame to the stage's color.
pub fn clear_frame<C: Canvas>(world: &mut World, canvas: &mut C) {
    let clear_color = world
        .get_resource::<Stage>()
        .copied()
        .unwrap_or_default()
        .clear_color;
    canvas.set_draw_color(clear_color);
    canvas.clear();
}

/// Draw every [`Shape`] in spawn order. There is no z-ordering.
pub fn render_shapes<C: Canvas>(world: &mut World, canvas: &mut C) {
    let mut shapes = world.query::<&Shape>();
    for shape in shapes.iter(world) {
        shape.draw(canvas);
    }
}

/// Draw every [`Player`] sprite with its current frame.
pub fn render_players<C>(world: &mut World, canvas: &mut C)
where
    C: Canvas,
    C::Texture: Send + Sync + 'static,
{
    let mut players = world.query::<&Player<C::Texture>>();
    for player in players.iter(world) {
        player.draw(canvas);
    }
}
