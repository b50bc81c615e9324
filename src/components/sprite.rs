use log::{error, trace};

use crate::canvas::{Canvas, IRect, TextureCreator};
use crate::drawable::{Drawable, Transformable};
use crate::resources::bitmapstore::BitmapStore;
use crate::shapes::point::Point2D;

/// Sprite drawn from a GPU texture, cropped by a source rectangle.
///
/// The texture is `None` when loading failed; drawing is then a no-op.
/// `width`/`height` are the intrinsic size used by [`Transformable::scale`];
/// the size on screen comes from the source rectangle.
#[derive(Debug)]
pub struct TexturedSprite<T> {
    texture: Option<T>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    src_rect: Option<IRect>,
}

impl<T> TexturedSprite<T> {
    /// Decode `path` and upload it through `creator`.
    ///
    /// The CPU-side surface is released as soon as the texture exists.
    /// Failures are logged and leave the sprite without a texture.
    pub fn load<TC>(path: &str, creator: &mut TC, x: i32, y: i32, width: i32, height: i32) -> Self
    where
        TC: TextureCreator<Texture = T>,
    {
        let mut store = BitmapStore::new();
        let texture = match store.load(path) {
            Ok(()) => store.take_surface().and_then(|surface| {
                creator
                    .create_texture_from_surface(&surface)
                    .map_err(|e| error!("texture creation failed for '{}': {}", path, e))
                    .ok()
            }),
            Err(e) => {
                error!("texture loading failed! {}", e);
                None
            }
        };
        Self::from_texture(texture, x, y, width, height)
    }

    pub fn from_texture(texture: Option<T>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            texture,
            x,
            y,
            width,
            height,
            src_rect: None,
        }
    }

    pub fn texture(&self) -> Option<&T> {
        self.texture.as_ref()
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn set_src_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.src_rect = Some(IRect::new(x, y, w, h));
    }

    pub fn src_rect(&self) -> Option<IRect> {
        self.src_rect
    }

    /// Where the sprite lands on screen: its position, sized by the source
    /// rectangle. Falls back to the intrinsic size before any source is set.
    pub fn dest_rect(&self) -> IRect {
        match self.src_rect {
            Some(src) => IRect::new(self.x, self.y, src.w, src.h),
            None => IRect::new(self.x, self.y, self.width, self.height),
        }
    }
}

impl<C: Canvas> Drawable<C> for TexturedSprite<C::Texture> {
    fn draw(&self, canvas: &mut C) {
        let (Some(texture), Some(src)) = (&self.texture, self.src_rect) else {
            return;
        };
        trace!("sprite src {} {} {} {}", src.x, src.y, src.w, src.h);
        canvas.copy(texture, Some(src), self.dest_rect());
    }
}

impl<C: Canvas> Transformable<C> for TexturedSprite<C::Texture> {
    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
        self.draw(canvas);
    }

    /// Rotated copy of the whole texture. The pivot is
    /// `((dst.x + dst.w) / 2, (dst.y + dst.h) / 2)`, relative to the
    /// destination corner.
    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        let Some(texture) = &self.texture else {
            error!("cannot rotate a sprite without texture");
            return;
        };
        let dst = self.dest_rect();
        let pivot = Point2D::new((dst.x + dst.w) / 2, (dst.y + dst.h) / 2);
        canvas.copy_ex(texture, None, dst, f64::from(angle), pivot);
    }

    fn scale(&mut self, canvas: &mut C, factor: f32) {
        if self.texture.is_none() {
            return;
        }
        let scaled_w = self.width as f32 * factor;
        let scaled_h = self.height as f32 * factor;
        let new_x = (self.x + self.width / 2) as f32 - scaled_w / 2.0;
        let new_y = (self.y + self.height / 2) as f32 - scaled_h / 2.0;

        self.x = new_x as i32;
        self.y = new_y as i32;
        self.width = scaled_w as i32;
        self.height = scaled_h as i32;
        self.draw(canvas);
    }
}
