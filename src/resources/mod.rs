//! ECS resources and long-lived state.
//!
//! Overview
//! - `bitmapstore` – CPU-side pixel surface with load/create/save/copy
//! - `clock` – millisecond clock, real or driven by hand
//! - `framepacer` – fixed frame budget and the sleep that fills it
//! - `gameconfig` – INI configuration with safe defaults
//! - `input` – key bindings and held unbound keys
//! - `loopstate` – exit flag of the render loop
//! - `stage` – per-scene clear color
//! - `worldtime` – frame time in milliseconds
pub mod bitmapstore;
pub mod clock;
pub mod framepacer;
pub mod gameconfig;
pub mod input;
pub mod loopstate;
pub mod stage;
pub mod worldtime;
