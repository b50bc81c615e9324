//! Capability traits shared by everything in a scene.
//!
//! A scene object picks the capabilities it needs. Every method has an empty
//! default body, so implementing only part of a trait (or none of its methods)
//! gives an object that silently ignores the rest:
//!
//! - [`Drawable`] – emit draw calls onto a [`Canvas`]
//! - [`Transformable`] – rotate, scale and translate, redrawing afterwards
//! - [`Updatable`] – per-frame update driven by the millisecond clock
//! - [`Animatable`] – legacy per-frame animation hook
//!
//! The canvas is always passed in by the caller; objects never keep a handle
//! to the renderer.

use crate::canvas::Canvas;

pub trait Drawable<C: Canvas> {
    fn draw(&self, _canvas: &mut C) {}
}

pub trait Transformable<C: Canvas> {
    /// Rotate by `angle` degrees.
    fn rotate(&mut self, _canvas: &mut C, _angle: f32) {}
    fn scale(&mut self, _canvas: &mut C, _factor: f32) {}
    fn translate(&mut self, _canvas: &mut C, _dx: i32, _dy: i32) {}
}

pub trait Updatable<C: Canvas> {
    fn update(&mut self, _canvas: &mut C, _now_ms: u64) {}
}

pub trait Animatable {
    fn animate(&mut self) {}
}
