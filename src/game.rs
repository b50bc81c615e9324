//! Scene setup and the per-frame sequence.
//!
//! [`setup`] fills a fresh [`World`] with the resources and entities of the
//! chosen [`SceneKind`]. [`run_frame`] then draws one frame:
//!
//! 1. clear to the stage color
//! 2. record the frame time
//! 3. deliver queued input (quit, or player moves)
//! 4. draw shapes
//! 5. run the update schedule (animation)
//! 6. draw players
//! 7. present

use bevy_ecs::prelude::*;
use clap::ValueEnum;
use log::info;
use raylib::prelude::Color;

use crate::canvas::{Canvas, TextureCreator};
use crate::components::animation::FrameAnimator;
use crate::components::player::Player;
use crate::components::shape::Shape;
use crate::components::sprite::TexturedSprite;
use crate::resources::gameconfig::GameConfig;
use crate::events::input::InputEvent;
use crate::resources::input::{HeldKeys, KeyBindings};
use crate::resources::loopstate::LoopState;
use crate::resources::stage::Stage;
use crate::resources::worldtime::WorldTime;
use crate::shapes::rectangle::Rectangle;
use crate::systems::animation::animation;
use crate::systems::input::dispatch_input;
use crate::systems::render::{clear_frame, render_players, render_shapes};
use crate::systems::time::update_world_time;

/// Which scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    /// The player alone on a white background.
    Walker,
    /// The player and a white outlined rectangle on black.
    #[default]
    Outlined,
}

impl SceneKind {
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Walker => "walker",
            SceneKind::Outlined => "outlined",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    pub fn clear_color(self) -> Color {
        match self {
            SceneKind::Walker => Color::WHITE,
            SceneKind::Outlined => Color::BLACK,
        }
    }
}

/// Player spawn position.
const PLAYER_START: (i32, i32) = (0, 0);

/// Insert the scene's resources and spawn its entities.
///
/// Textures are created through `creator`; a sprite sheet that fails to
/// load leaves the player invisible but still controllable.
pub fn setup<TC>(world: &mut World, creator: &mut TC, config: &GameConfig, now_ms: u64)
where
    TC: TextureCreator,
    TC::Texture: Send + Sync + 'static,
{
    world.insert_resource(WorldTime::starting_at(now_ms));
    world.init_resource::<Messages<InputEvent>>();
    world.insert_resource(KeyBindings::default());
    world.insert_resource(HeldKeys::default());
    world.insert_resource(LoopState::default());
    world.insert_resource(Stage {
        clear_color: config.scene.clear_color(),
    });

    let frame_width = config.frame_width as i32;
    let frame_height = config.frame_height as i32;
    let sprite = TexturedSprite::load(
        &config.sprite_sheet,
        creator,
        PLAYER_START.0,
        PLAYER_START.1,
        frame_width,
        frame_height,
    );
    let animator = FrameAnimator::new(frame_width, frame_height, now_ms)
        .with_speed(config.animation_speed_ms);
    world.spawn(Player::new(sprite, animator, config.move_speed as i32));

    if config.scene == SceneKind::Outlined {
        world.spawn(Shape::from(Rectangle::new(10, 10, 300, 300, Color::WHITE)));
    }

    info!("Scene '{}' ready", config.scene.name());
}

/// Systems run once per frame between drawing shapes and drawing players.
pub fn update_schedule<T: Send + Sync + 'static>() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation::<T>);
    schedule
}

/// Draw one frame at `now_ms`. Input messages must already be written.
pub fn run_frame<C>(world: &mut World, schedule: &mut Schedule, canvas: &mut C, now_ms: u64)
where
    C: Canvas,
    C::Texture: Send + Sync + 'static,
{
    clear_frame(world, canvas);
    update_world_time(world, now_ms);
    dispatch_input(world, canvas);
    render_shapes(world, canvas);
    schedule.run(world);
    render_players(world, canvas);
    canvas.present();
}
