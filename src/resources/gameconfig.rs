//! Game configuration.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = window
//! target_fps = 60
//!
//! [scene]
//! variant = outlined
//! sprite_sheet = img/ss.png
//! frame_width = 64
//! frame_height = 64
//! move_speed = 2
//! animation_speed_ms = 100
//! ```

use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::animation::DEFAULT_ANIMATION_SPEED_MS;
use crate::components::player::DEFAULT_MOVE_SPEED;
use crate::game::SceneKind;
use crate::resources::framepacer::DEFAULT_TARGET_FPS;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_TITLE: &str = "window";
const DEFAULT_SPRITE_SHEET: &str = "img/ss.png";
const DEFAULT_FRAME_SIZE: u32 = 64;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Startup configuration: window, scene and player settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Which scene to build.
    pub scene: SceneKind,
    /// Path of the player's sprite sheet.
    pub sprite_sheet: String,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Pixels the player moves per key event.
    pub move_speed: u32,
    /// Milliseconds between walk-cycle frames.
    pub animation_speed_ms: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            scene: SceneKind::default(),
            sprite_sheet: DEFAULT_SPRITE_SHEET.to_string(),
            frame_width: DEFAULT_FRAME_SIZE,
            frame_height: DEFAULT_FRAME_SIZE,
            move_speed: DEFAULT_MOVE_SPEED as u32,
            animation_speed_ms: DEFAULT_ANIMATION_SPEED_MS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [scene] section
        if let Some(variant) = config.get("scene", "variant") {
            match SceneKind::from_name(&variant) {
                Some(scene) => self.scene = scene,
                None => warn!("Unknown scene variant '{}', keeping {:?}", variant, self.scene),
            }
        }
        if let Some(path) = config.get("scene", "sprite_sheet") {
            self.sprite_sheet = path;
        }
        if let Some(w) = config.getuint("scene", "frame_width").ok().flatten() {
            self.frame_width = w as u32;
        }
        if let Some(h) = config.getuint("scene", "frame_height").ok().flatten() {
            self.frame_height = h as u32;
        }
        if let Some(speed) = config.getuint("scene", "move_speed").ok().flatten() {
            self.move_speed = speed as u32;
        }
        if let Some(ms) = config.getuint("scene", "animation_speed_ms").ok().flatten() {
            self.animation_speed_ms = ms;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, scene={:?}, sheet={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.scene,
            self.sprite_sheet
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [scene] section
        config.set("scene", "variant", Some(self.scene.name().to_string()));
        config.set("scene", "sprite_sheet", Some(self.sprite_sheet.clone()));
        config.set("scene", "frame_width", Some(self.frame_width.to_string()));
        config.set("scene", "frame_height", Some(self.frame_height.to_string()));
        config.set("scene", "move_speed", Some(self.move_speed.to_string()));
        config.set(
            "scene",
            "animation_speed_ms",
            Some(self.animation_speed_ms.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
