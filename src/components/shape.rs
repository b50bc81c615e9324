use bevy_ecs::prelude::Component;

use crate::canvas::Canvas;
use crate::drawable::{Drawable, Transformable};
use crate::shapes::line::Line;
use crate::shapes::rectangle::Rectangle;
use crate::shapes::segment::LineSegment;

/// Any geometric primitive placed in the scene.
///
/// Rendering and transforms dispatch to the wrapped primitive.
#[derive(Component, Debug, Clone, PartialEq)]
pub enum Shape {
    Segment(LineSegment),
    Line(Line),
    Rectangle(Rectangle),
}

impl<C: Canvas> Drawable<C> for Shape {
    fn draw(&self, canvas: &mut C) {
        match self {
            Shape::Segment(segment) => segment.draw(canvas),
            Shape::Line(line) => line.draw(canvas),
            Shape::Rectangle(rect) => rect.draw(canvas),
        }
    }
}

impl<C: Canvas> Transformable<C> for Shape {
    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        match self {
            Shape::Segment(segment) => segment.rotate(canvas, angle),
            Shape::Line(line) => line.rotate(canvas, angle),
            Shape::Rectangle(rect) => rect.rotate(canvas, angle),
        }
    }

    fn scale(&mut self, canvas: &mut C, factor: f32) {
        match self {
            Shape::Segment(segment) => segment.scale(canvas, factor),
            Shape::Line(line) => line.scale(canvas, factor),
            Shape::Rectangle(rect) => rect.scale(canvas, factor),
        }
    }

    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        match self {
            Shape::Segment(segment) => segment.translate(canvas, dx, dy),
            Shape::Line(line) => line.translate(canvas, dx, dy),
            Shape::Rectangle(rect) => rect.translate(canvas, dx, dy),
        }
    }
}

impl From<LineSegment> for Shape {
    fn from(segment: LineSegment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}
