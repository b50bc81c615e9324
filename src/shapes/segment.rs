//! Line segment between two [`Point2D`]s.
//!
//! Rotation and scaling happen about the segment's midpoint, computed in
//! `f32`. Results are truncated toward zero when written back, so repeated
//! transforms drift by up to one pixel per call.

use raylib::prelude::Color;

use super::point::Point2D;
use super::{plot_line, rotate_about, to_radians};
use crate::canvas::Canvas;
use crate::drawable::{Drawable, Transformable};

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point2D,
    end: Point2D,
    color: Color,
}

impl LineSegment {
    pub fn new(start: Point2D, end: Point2D, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn set_start(&mut self, x: i32, y: i32) {
        self.start.set_point(x, y);
    }

    pub fn set_end(&mut self, x: i32, y: i32) {
        self.end.set_point(x, y);
    }

    pub fn start(&self) -> Point2D {
        self.start
    }

    pub fn end(&self) -> Point2D {
        self.end
    }

    pub fn start_x(&self) -> i32 {
        self.start.x()
    }

    pub fn start_y(&self) -> i32 {
        self.start.y()
    }

    pub fn end_x(&self) -> i32 {
        self.end.x()
    }

    pub fn end_y(&self) -> i32 {
        self.end.y()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the color, emit the segment and present.
    ///
    /// This is what [`Drawable::draw`] does; transforms call it directly.
    pub fn draw_segment<C: Canvas>(&self, canvas: &mut C) {
        plot_line(
            canvas,
            self.color,
            self.start.x(),
            self.start.y(),
            self.end.x(),
            self.end.y(),
        );
    }

    fn midpoint(&self) -> (f32, f32) {
        (
            (self.start.x() + self.end.x()) as f32 / 2.0,
            (self.start.y() + self.end.y()) as f32 / 2.0,
        )
    }
}

impl<C: Canvas> Drawable<C> for LineSegment {
    fn draw(&self, canvas: &mut C) {
        self.draw_segment(canvas);
    }
}

impl<C: Canvas> Transformable<C> for LineSegment {
    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        self.start
            .set_point(self.start.x() + dx, self.start.y() + dy);
        self.end.set_point(self.end.x() + dx, self.end.y() + dy);
        self.draw_segment(canvas);
    }

    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        let (cx, cy) = self.midpoint();
        let radians = to_radians(angle);

        for point in [&mut self.start, &mut self.end] {
            let (x, y) = rotate_about(point.x() as f32, point.y() as f32, cx, cy, radians);
            point.set_point(x as i32, y as i32);
        }
        self.draw_segment(canvas);
    }

    fn scale(&mut self, canvas: &mut C, factor: f32) {
        let (cx, cy) = self.midpoint();

        for point in [&mut self.start, &mut self.end] {
            let x = cx + (point.x() as f32 - cx) * factor;
            let y = cy + (point.y() as f32 - cy) * factor;
            point.set_point(x as i32, y as i32);
        }
        self.draw_segment(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCmd, RecordingCanvas};

    fn segment(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment::new(Point2D::new(x1, y1), Point2D::new(x2, y2), Color::WHITE)
    }

    fn endpoints(s: &LineSegment) -> (i32, i32, i32, i32) {
        (s.start_x(), s.start_y(), s.end_x(), s.end_y())
    }

    #[test]
    fn test_draw_sets_color_line_and_presents() {
        let mut canvas = RecordingCanvas::new();
        let s = LineSegment::new(Point2D::new(1, 2), Point2D::new(3, 4), Color::RED);
        s.draw(&mut canvas);
        assert_eq!(
            canvas.commands,
            vec![
                DrawCmd::SetColor(Color::RED),
                DrawCmd::Line {
                    x1: 1,
                    y1: 2,
                    x2: 3,
                    y2: 4
                },
                DrawCmd::Present,
            ]
        );
    }

    #[test]
    fn test_translate_moves_both_endpoints() {
        let mut canvas = RecordingCanvas::new();
        for (dx, dy) in [(0, 0), (5, -3), (-100, 250), (7, 7)] {
            let mut s = segment(10, 20, -30, 40);
            s.translate(&mut canvas, dx, dy);
            assert_eq!(endpoints(&s), (10 + dx, 20 + dy, -30 + dx, 40 + dy));
        }
    }

    #[test]
    fn test_translate_redraws() {
        let mut canvas = RecordingCanvas::new();
        let mut s = segment(0, 0, 10, 0);
        s.translate(&mut canvas, 1, 1);
        assert_eq!(canvas.lines(), vec![(1, 1, 11, 1)]);
        assert_eq!(canvas.presents(), 1);
    }

    #[test]
    fn test_rotate_quarter_turn_about_midpoint() {
        let mut canvas = RecordingCanvas::new();
        let mut s = segment(100, 100, 200, 100);
        s.rotate(&mut canvas, 90.0);
        let (sx, sy, ex, ey) = endpoints(&s);
        assert!((sx - 150).abs() <= 1 && (sy - 50).abs() <= 1, "{:?}", endpoints(&s));
        assert!((ex - 150).abs() <= 1 && (ey - 150).abs() <= 1, "{:?}", endpoints(&s));
        assert_eq!(canvas.lines().len(), 1);
    }

    #[test]
    fn test_rotate_full_turn_within_one_pixel() {
        let mut canvas = RecordingCanvas::new();
        for (x1, y1, x2, y2) in [(100, 100, 200, 100), (-40, 13, 77, -250), (0, 0, 1, 1)] {
            let mut s = segment(x1, y1, x2, y2);
            s.rotate(&mut canvas, 360.0);
            let (sx, sy, ex, ey) = endpoints(&s);
            assert!((sx - x1).abs() <= 1 && (sy - y1).abs() <= 1);
            assert!((ex - x2).abs() <= 1 && (ey - y2).abs() <= 1);
        }
    }

    #[test]
    fn test_scale_identity_is_noop() {
        let mut canvas = RecordingCanvas::new();
        for (x1, y1, x2, y2) in [(100, 100, 200, 100), (-41, 13, 77, -250), (3, 3, 3, 3)] {
            let mut s = segment(x1, y1, x2, y2);
            s.scale(&mut canvas, 1.0);
            assert_eq!(endpoints(&s), (x1, y1, x2, y2));
        }
    }

    #[test]
    fn test_scale_doubles_about_midpoint() {
        let mut canvas = RecordingCanvas::new();
        let mut s = segment(100, 100, 200, 100);
        s.scale(&mut canvas, 2.0);
        assert_eq!(endpoints(&s), (50, 100, 250, 100));
    }

    #[test]
    fn test_degenerate_segment_still_draws() {
        let mut canvas = RecordingCanvas::new();
        let mut s = segment(5, 5, 5, 5);
        s.rotate(&mut canvas, 45.0);
        s.scale(&mut canvas, 3.0);
        assert_eq!(endpoints(&s), (5, 5, 5, 5));
        assert_eq!(canvas.lines(), vec![(5, 5, 5, 5), (5, 5, 5, 5)]);
    }
}
