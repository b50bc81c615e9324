//! In-memory canvas and textures.
//!
//! [`RecordingCanvas`] stores every call as a [`DrawCmd`] instead of touching a
//! GPU, and [`MockTextureCreator`] hands out [`MockTexture`]s sized after the
//! surface they were created from.

use image::DynamicImage;
use raylib::prelude::Color;

use super::{Canvas, IRect, TextureCreator};
use crate::shapes::point::Point2D;

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    SetColor(Color),
    Clear,
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    Rect(IRect),
    Present,
    Copy {
        texture: u32,
        src: Option<IRect>,
        dst: IRect,
    },
    CopyEx {
        texture: u32,
        src: Option<IRect>,
        dst: IRect,
        angle: f64,
        pivot: Point2D,
    },
}

/// Texture stand-in identified by a creation counter.
#[derive(Debug, PartialEq, Eq)]
pub struct MockTexture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub struct MockTextureCreator {
    next_id: u32,
    /// When set, every creation fails.
    pub fail: bool,
}

impl MockTextureCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of textures created so far.
    pub fn created(&self) -> u32 {
        self.next_id
    }
}

impl TextureCreator for MockTextureCreator {
    type Texture = MockTexture;

    fn create_texture_from_surface(
        &mut self,
        surface: &DynamicImage,
    ) -> Result<MockTexture, String> {
        if self.fail {
            return Err("texture creation disabled".to_string());
        }
        self.next_id += 1;
        Ok(MockTexture {
            id: self.next_id,
            width: surface.width(),
            height: surface.height(),
        })
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCmd>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Every line drawn, as `(x1, y1, x2, y2)`.
    pub fn lines(&self) -> Vec<(i32, i32, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCmd::Line { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
                _ => None,
            })
            .collect()
    }

    /// Every rectangle outline drawn.
    pub fn rects(&self) -> Vec<IRect> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCmd::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// `(src, dst)` of every plain texture copy.
    pub fn copies(&self) -> Vec<(Option<IRect>, IRect)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCmd::Copy { src, dst, .. } => Some((src, dst)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|cmd| wanted(*cmd)).count()
    }

    pub fn presents(&self) -> usize {
        self.count(|cmd| matches!(cmd, DrawCmd::Present))
    }
}

impl Canvas for RecordingCanvas {
    type Texture = MockTexture;

    fn set_draw_color(&mut self, color: Color) {
        self.commands.push(DrawCmd::SetColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCmd::Line { x1, y1, x2, y2 });
    }

    fn draw_rect(&mut self, rect: IRect) {
        self.commands.push(DrawCmd::Rect(rect));
    }

    fn present(&mut self) {
        self.commands.push(DrawCmd::Present);
    }

    fn copy(&mut self, texture: &MockTexture, src: Option<IRect>, dst: IRect) {
        self.commands.push(DrawCmd::Copy {
            texture: texture.id,
            src,
            dst,
        });
    }

    fn copy_ex(
        &mut self,
        texture: &MockTexture,
        src: Option<IRect>,
        dst: IRect,
        angle: f64,
        pivot: Point2D,
    ) {
        self.commands.push(DrawCmd::CopyEx {
            texture: texture.id,
            src,
            dst,
            angle,
            pivot,
        });
    }
}
