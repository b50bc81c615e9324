//! walkcycle main entry point.
//!
//! Opens a raylib window and walks a sprite-sheet character around with the
//! arrow keys, at a fixed 60 frames per second.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and apply CLI overrides
//! 2. Open the window, build the scene into an ECS world
//! 3. Each frame: poll the keyboard, draw the frame, sleep the rest of the
//!    frame budget
//! 4. Stop when the window is asked to close
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene walker
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Texture2D;

use walkcycle::engine::{Engine, RaylibCanvas};
use walkcycle::game::{self, SceneKind};
use walkcycle::resources::clock::{Clock, SystemClock};
use walkcycle::resources::framepacer::FramePacer;
use walkcycle::resources::gameconfig::GameConfig;
use walkcycle::resources::loopstate::LoopState;
use walkcycle::resources::worldtime::WorldTime;
use walkcycle::systems::input::poll_input_events;

/// Walk-cycle sprite demo
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Scene to show, overriding the configuration file.
    #[arg(long, value_enum)]
    scene: Option<SceneKind>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(scene) = cli.scene {
        config.scene = scene;
    }

    let mut clock = SystemClock::new();
    let pacer = FramePacer::new(config.target_fps);

    let mut engine = Engine::new(&config);
    // Declared after the engine so its textures are released first.
    let mut world = World::new();
    game::setup(&mut world, &mut engine, &config, clock.ticks_ms());
    let mut schedule = game::update_schedule::<Texture2D>();

    while !world.resource::<LoopState>().quit {
        let frame_start = clock.ticks_ms();
        poll_input_events(engine.handle_mut(), &mut world);
        {
            let mut d = engine.begin_frame();
            let mut canvas = RaylibCanvas::new(&mut d);
            game::run_frame(&mut world, &mut schedule, &mut canvas, frame_start);
        }
        pacer.pace(&mut clock, frame_start);
    }

    log::info!(
        "Bye! {} frames drawn",
        world.resource::<WorldTime>().frame_count
    );
}
