//! Scene systems.
//!
//! Submodules overview
//! - [`animation`] – advance walk-cycle animations from world time
//! - [`input`] – poll the keyboard into events and dispatch them to players
//! - [`render`] – clear the frame and draw shapes and players
//! - [`time`] – update frame time

pub mod animation;
pub mod input;
pub mod render;
pub mod time;
