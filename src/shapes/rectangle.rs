use log::info;
use raylib::prelude::Color;

use super::{rotate_about, to_radians};
use crate::canvas::{Canvas, IRect};
use crate::drawable::{Drawable, Transformable};

/// Axis-aligned rectangle drawn as an outline.
///
/// `(x, y)` is the top-left corner. Width and height are expected to be
/// non-negative but are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, w: i32, h: i32, color: Color) -> Self {
        info!("Object Rectangle Created");
        Self { x, y, w, h, color }
    }

    pub fn bounds(&self) -> IRect {
        IRect::new(self.x, self.y, self.w, self.h)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Corners in TL, TR, BR, BL order.
    fn corners(&self) -> [(i32, i32); 4] {
        [
            (self.x, self.y),
            (self.x + self.w, self.y),
            (self.x + self.w, self.y + self.h),
            (self.x, self.y + self.h),
        ]
    }
}

impl<C: Canvas> Drawable<C> for Rectangle {
    fn draw(&self, canvas: &mut C) {
        canvas.set_draw_color(self.color);
        canvas.draw_rect(self.bounds());
        canvas.present();
    }
}

impl<C: Canvas> Transformable<C> for Rectangle {
    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
        self.draw(canvas);
    }

    /// Draws the four rotated edges. The stored bounds stay axis-aligned, so
    /// the next [`Drawable::draw`] shows the unrotated box again.
    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        let cx = (self.x + self.w / 2) as f32;
        let cy = (self.y + self.h / 2) as f32;
        let radians = to_radians(angle);

        let points = self.corners().map(|(x, y)| {
            let (rx, ry) = rotate_about(x as f32, y as f32, cx, cy, radians);
            (rx.round() as i32, ry.round() as i32)
        });

        canvas.set_draw_color(self.color);
        for i in 0..points.len() {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % points.len()];
            canvas.draw_line(x1, y1, x2, y2);
        }
        canvas.present();
    }

    /// Scales about the center.
    ///
    /// The new height is taken from the scaled *width*, so a non-square
    /// rectangle comes out square.
    fn scale(&mut self, canvas: &mut C, factor: f32) {
        let scaled_w = self.w as f32 * factor;
        let scaled_h = self.h as f32 * factor;

        let new_x = (self.x + self.w / 2) as f32 - scaled_w / 2.0;
        let new_y = (self.y + self.h / 2) as f32 - scaled_h / 2.0;

        self.x = new_x as i32;
        self.y = new_y as i32;
        self.w = scaled_w as i32;
        self.h = scaled_w as i32;
        self.draw(canvas);
    }
}
