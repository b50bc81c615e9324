//! raylib host: window, texture upload and the per-frame canvas.
//!
//! [`Engine`] owns the raylib handle and render thread token for the life of
//! the program. Each frame, [`Engine::begin_frame`] opens a draw handle that
//! [`RaylibCanvas`] wraps; the frame reaches the screen when that handle is
//! dropped.
//!
//! Everything holding a texture from [`Engine`] must be dropped before it.

use image::DynamicImage;
use log::info;
use raylib::ffi;
use raylib::prelude::*;

use crate::canvas::{Canvas, IRect, TextureCreator};
use crate::resources::gameconfig::GameConfig;
use crate::shapes::point::Point2D;

pub struct Engine {
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl Engine {
    /// Open the window described by `config`.
    ///
    /// raylib panics when the window cannot be created, so a returned
    /// engine always has a live window.
    pub fn new(config: &GameConfig) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(&config.window_title)
            .build();
        // Only the window close request quits.
        rl.set_exit_key(None);
        info!(
            "Engine Init was successful: {}x{} window",
            config.window_width, config.window_height
        );

        Self { rl, thread }
    }

    pub fn handle_mut(&mut self) -> &mut RaylibHandle {
        &mut self.rl
    }

    /// Start drawing a frame. The frame is shown when the handle drops.
    pub fn begin_frame(&mut self) -> RaylibDrawHandle<'_> {
        self.rl.begin_drawing(&self.thread)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        info!("Engine shutting down");
    }
}

impl TextureCreator for Engine {
    type Texture = Texture2D;

    /// Upload `surface` as an RGBA8 texture.
    fn create_texture_from_surface(&mut self, surface: &DynamicImage) -> Result<Texture2D, String> {
        let rgba = surface.to_rgba8();
        let (width, height) = rgba.dimensions();
        let bytes = rgba.as_raw();

        // raylib frees image data with its own allocator.
        let image = unsafe {
            let data = ffi::MemAlloc(bytes.len() as u32);
            if data.is_null() {
                return Err(format!(
                    "Failed to allocate {} bytes for texture upload",
                    bytes.len()
                ));
            }
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), data as *mut u8, bytes.len());
            Image::from_raw(ffi::Image {
                data,
                width: width as i32,
                height: height as i32,
                mipmaps: 1,
                format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
            })
        };

        let texture = self
            .rl
            .load_texture_from_image(&self.thread, &image)
            .map_err(|e| format!("Failed to create texture: {}", e))?;
        info!("Uploaded {}x{} texture", width, height);
        Ok(texture)
    }
}

impl From<IRect> for Rectangle {
    fn from(rect: IRect) -> Self {
        Rectangle::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
    }
}

/// [`Canvas`] over one frame's raylib draw handle.
///
/// Draw calls use the last color set with [`Canvas::set_draw_color`].
/// `present` does nothing: raylib shows the frame when the draw handle ends.
pub struct RaylibCanvas<'h, 'a> {
    d: &'h mut RaylibDrawHandle<'a>,
    color: Color,
}

impl<'h, 'a> RaylibCanvas<'h, 'a> {
    pub fn new(d: &'h mut RaylibDrawHandle<'a>) -> Self {
        Self {
            d,
            color: Color::WHITE,
        }
    }

    fn source_rect(texture: &Texture2D, src: Option<IRect>) -> Rectangle {
        match src {
            Some(src) => src.into(),
            None => Rectangle::new(0.0, 0.0, texture.width as f32, texture.height as f32),
        }
    }
}

impl Canvas for RaylibCanvas<'_, '_> {
    type Texture = Texture2D;

    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.d.clear_background(self.color);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.d.draw_line(x1, y1, x2, y2, self.color);
    }

    fn draw_rect(&mut self, rect: IRect) {
        self.d
            .draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, self.color);
    }

    fn present(&mut self) {}

    fn copy(&mut self, texture: &Texture2D, src: Option<IRect>, dst: IRect) {
        let source = Self::source_rect(texture, src);
        self.d.draw_texture_pro(
            texture,
            source,
            Rectangle::from(dst),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    fn copy_ex(
        &mut self,
        texture: &Texture2D,
        src: Option<IRect>,
        dst: IRect,
        angle: f64,
        pivot: Point2D,
    ) {
        let source = Self::source_rect(texture, src);
        // raylib anchors `origin` at the destination position.
        let dest = Rectangle::new(
            (dst.x + pivot.x()) as f32,
            (dst.y + pivot.y()) as f32,
            dst.w as f32,
            dst.h as f32,
        );
        self.d.draw_texture_pro(
            texture,
            source,
            dest,
            Vector2::new(pivot.x() as f32, pivot.y() as f32),
            angle as f32,
            Color::WHITE,
        );
    }
}
