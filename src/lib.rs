//! walkcycle library.
//!
//! A 2D scene model (shapes, textured sprites, a walk-cycle animator and a
//! keyboard-driven player) drawn through the [`canvas::Canvas`] trait, plus a
//! raylib host in [`engine`]. Exposed as a library for the executable and the
//! integration tests.

pub mod canvas;
pub mod components;
pub mod drawable;
pub mod engine;
pub mod events;
pub mod game;
pub mod resources;
pub mod shapes;
pub mod systems;
