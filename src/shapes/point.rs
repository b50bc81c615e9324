use crate::canvas::Canvas;
use crate::drawable::{Drawable, Transformable};

/// Integer 2D point.
///
/// Coordinates are read through [`Point2D::x`]/[`Point2D::y`] and only change
/// through [`Point2D::set_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2D {
    x: i32,
    y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn set_point(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

// A point has no visual of its own.
impl<C: Canvas> Drawable<C> for Point2D {}
impl<C: Canvas> Transformable<C> for Point2D {}
