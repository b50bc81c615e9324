//! ECS components for scene entities.
//!
//! Submodules overview:
//! - [`animation`] – frame timing for a row-per-direction sprite sheet
//! - [`player`] – keyboard-driven walking character and its facing [`Direction`](player::Direction)
//! - [`shape`] – geometric primitive placed in the scene
//! - [`sprite`] – textured sprite with a source rectangle

pub mod animation;
pub mod player;
pub mod shape;
pub mod sprite;
