//! Rendering seam between the scene model and the host renderer.
//!
//! Everything that ends up on screen goes through the [`Canvas`] trait, and
//! every texture is created through a [`TextureCreator`]. The raylib backend
//! lives in [`crate::engine`]; [`recording`] keeps every call in memory so the
//! scene can be exercised without a window.

pub mod recording;

use image::DynamicImage;
use raylib::prelude::Color;

use crate::shapes::point::Point2D;

/// Integer rectangle in pixels. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Immediate-mode 2D drawing surface for one frame.
///
/// The draw color is sticky: [`Canvas::clear`], [`Canvas::draw_line`] and
/// [`Canvas::draw_rect`] use whatever was last passed to
/// [`Canvas::set_draw_color`]. Texture copies are not tinted.
pub trait Canvas {
    /// Texture type this canvas can sample from.
    type Texture;

    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    /// Outline of `rect`, one pixel wide.
    fn draw_rect(&mut self, rect: IRect);
    /// Make everything drawn so far visible.
    fn present(&mut self);

    /// Copy `src` of `texture` (or the whole texture when `None`) into `dst`.
    fn copy(&mut self, texture: &Self::Texture, src: Option<IRect>, dst: IRect);

    /// Like [`Canvas::copy`], rotated clockwise by `angle` degrees around
    /// `pivot`, given relative to the top-left corner of `dst`.
    fn copy_ex(
        &mut self,
        texture: &Self::Texture,
        src: Option<IRect>,
        dst: IRect,
        angle: f64,
        pivot: Point2D,
    );
}

/// Turns a CPU-side surface into a texture the matching [`Canvas`] can draw.
pub trait TextureCreator {
    type Texture;

    fn create_texture_from_surface(
        &mut self,
        surface: &DynamicImage,
    ) -> Result<Self::Texture, String>;
}
