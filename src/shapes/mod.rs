//! Geometric primitives.
//!
//! - [`point`] – integer point
//! - [`segment`] – line segment between two points, transformed about its midpoint
//! - [`line`] – four-integer line with its own rotation/scale rules
//! - [`rectangle`] – axis-aligned rectangle drawn as an outline
//!
//! Transforms work in `f32` and convert back to integer pixels; see each
//! primitive for its rounding rule.

pub mod line;
pub mod point;
pub mod rectangle;
pub mod segment;

use raylib::prelude::Color;

use crate::canvas::Canvas;

/// Set `color`, emit one line from `(x1, y1)` to `(x2, y2)` and present.
pub(crate) fn plot_line<C: Canvas>(canvas: &mut C, color: Color, x1: i32, y1: i32, x2: i32, y2: i32) {
    canvas.set_draw_color(color);
    canvas.draw_line(x1, y1, x2, y2);
    canvas.present();
}

/// Degrees to radians, in the precision every transform uses.
pub(crate) fn to_radians(angle: f32) -> f32 {
    angle * std::f32::consts::PI / 180.0
}

/// Rotate `(x, y)` by `radians` around `(cx, cy)`.
pub(crate) fn rotate_about(x: f32, y: f32, cx: f32, cy: f32, radians: f32) -> (f32, f32) {
    let (sin, cos) = radians.sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}
