//! Line stored as four integers.
//!
//! Draws through the same line helper as
//! [`LineSegment`](super::segment::LineSegment) but has its own transform
//! rules: rotation is plotted only and never stored, and scaling is about the
//! origin rather than the midpoint.

use raylib::prelude::Color;

use super::{plot_line, rotate_about, to_radians};
use crate::canvas::Canvas;
use crate::drawable::{Drawable, Transformable};

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    x_start: i32,
    y_start: i32,
    x_end: i32,
    y_end: i32,
    color: Color,
}

impl Line {
    pub fn create_object(x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Self {
        Self {
            x_start: x1,
            y_start: y1,
            x_end: x2,
            y_end: y2,
            color,
        }
    }

    /// `(x_start, y_start, x_end, y_end)`.
    pub fn coords(&self) -> (i32, i32, i32, i32) {
        (self.x_start, self.y_start, self.x_end, self.y_end)
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl<C: Canvas> Drawable<C> for Line {
    fn draw(&self, canvas: &mut C) {
        plot_line(
            canvas,
            self.color,
            self.x_start,
            self.y_start,
            self.x_end,
            self.y_end,
        );
    }
}

impl<C: Canvas> Transformable<C> for Line {
    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        self.x_start += dx;
        self.x_end += dx;
        self.y_start += dy;
        self.y_end += dy;
        self.draw(canvas);
    }

    /// Plots the rotated line without storing it.
    ///
    /// The plotted endpoints are `(p0.x, p1.x)` and `(p0.y, p1.y)`, not
    /// `p0` and `p1`.
    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        let cx = ((self.x_start + self.x_end) / 2) as f32;
        let cy = ((self.y_start + self.y_end) / 2) as f32;
        let radians = to_radians(angle);

        let [p0, p1] = [(self.x_start, self.y_start), (self.x_end, self.y_end)].map(|(x, y)| {
            let (rx, ry) = rotate_about(x as f32, y as f32, cx, cy, radians);
            (rx.round() as i32, ry.round() as i32)
        });

        plot_line(canvas, self.color, p0.0, p1.0, p0.1, p1.1);
    }

    fn scale(&mut self, canvas: &mut C, factor: f32) {
        self.x_start = (self.x_start as f32 * factor) as i32;
        self.y_start = (self.y_start as f32 * factor) as i32;
        self.x_end = (self.x_end as f32 * factor) as i32;
        self.y_end = (self.y_end as f32 * factor) as i32;
        self.draw(canvas);
    }
}
