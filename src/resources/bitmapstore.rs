//! CPU-side pixel surface with load/create/save/copy.
//!
//! A [`BitmapStore`] owns at most one surface. Loading or creating replaces
//! (and drops) whatever was held before; [`BitmapStore::take_surface`] moves
//! the surface out, for example to upload it as a texture.
//!
//! ```ignore
//! let mut sheet = BitmapStore::new();
//! sheet.load("img/ss.png")?;
//! let mut canvas = BitmapStore::new();
//! canvas.create_default(512, 512)?;
//! sheet.copy_to(&mut canvas)?;
//! canvas.save("out.bmp")?;
//! ```

use std::path::Path;

use image::{DynamicImage, ImageFormat, imageops};
use log::{debug, info};

/// Bits per pixel used by [`BitmapStore::create_default`].
pub const DEFAULT_DEPTH: u32 = 24;

#[derive(Debug, Default)]
pub struct BitmapStore {
    surface: Option<DynamicImage>,
}

impl BitmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file, replacing the held surface.
    ///
    /// On failure the store is left empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        self.delete();
        let surface = image::open(path)
            .map_err(|e| format!("Failed to load image {:?}: {}", path, e))?;
        info!(
            "Loaded bitmap {:?} ({}x{})",
            path,
            surface.width(),
            surface.height()
        );
        self.surface = Some(surface);
        Ok(())
    }

    /// Allocate a blank (all zero) surface, replacing the held one.
    ///
    /// `depth` 24 gives RGB, 32 gives RGBA; other depths are rejected and
    /// leave the store empty.
    pub fn create(&mut self, width: u32, height: u32, depth: u32) -> Result<(), String> {
        self.delete();
        let surface = match depth {
            24 => DynamicImage::new_rgb8(width, height),
            32 => DynamicImage::new_rgba8(width, height),
            other => return Err(format!("Unsupported bitmap depth: {} bpp", other)),
        };
        debug!("Created {}x{} bitmap at {} bpp", width, height, depth);
        self.surface = Some(surface);
        Ok(())
    }

    /// [`create`](Self::create) at [`DEFAULT_DEPTH`].
    pub fn create_default(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.create(width, height, DEFAULT_DEPTH)
    }

    /// Release the held surface, if any.
    pub fn delete(&mut self) {
        self.surface = None;
    }

    /// Write the held surface as a BMP file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| "No bitmap to save".to_string())?;
        surface
            .save_with_format(path, ImageFormat::Bmp)
            .map_err(|e| format!("Failed to save bitmap {:?}: {}", path, e))?;
        info!("Saved bitmap to {:?}", path);
        Ok(())
    }

    /// Copy the whole surface into `dst` at its origin.
    ///
    /// Pixels outside `dst` are dropped and covered pixels are overwritten
    /// without blending. Both stores must hold a surface; otherwise nothing
    /// is copied.
    pub fn copy_to(&self, dst: &mut BitmapStore) -> Result<(), String> {
        let src = self
            .surface
            .as_ref()
            .ok_or_else(|| "Source bitmap is empty".to_string())?;
        let target = dst
            .surface
            .as_mut()
            .ok_or_else(|| "Destination bitmap is empty".to_string())?;

        match target {
            DynamicImage::ImageRgb8(buf) => imageops::replace(buf, &src.to_rgb8(), 0, 0),
            DynamicImage::ImageRgba8(buf) => imageops::replace(buf, &src.to_rgba8(), 0, 0),
            other => {
                let mut buf = other.to_rgba8();
                imageops::replace(&mut buf, &src.to_rgba8(), 0, 0);
                *other = DynamicImage::ImageRgba8(buf);
            }
        }
        Ok(())
    }

    pub fn surface(&self) -> Option<&DynamicImage> {
        self.surface.as_ref()
    }

    /// Move the surface out, leaving the store empty.
    pub fn take_surface(&mut self) -> Option<DynamicImage> {
        self.surface.take()
    }

    pub fn is_loaded(&self) -> bool {
        self.surface.is_some()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn test_create_default_is_rgb24() {
        let mut store = BitmapStore::new();
        store.create_default(8, 4).unwrap();
        assert!(matches!(store.surface(), Some(DynamicImage::ImageRgb8(_))));
        assert_eq!(store.dimensions(), Some((8, 4)));
    }

    #[test]
    fn test_create_rejects_unknown_depth() {
        let mut store = BitmapStore::new();
        store.create_default(2, 2).unwrap();
        assert!(store.create(2, 2, 16).is_err());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_recreate_replaces_surface() {
        let mut store = BitmapStore::new();
        store.create(4, 4, 24).unwrap();
        store.create(10, 3, 32).unwrap();
        assert!(matches!(store.surface(), Some(DynamicImage::ImageRgba8(_))));
        assert_eq!(store.dimensions(), Some((10, 3)));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = BitmapStore::new();
        store.create_default(2, 2).unwrap();
        store.delete();
        store.delete();
        assert!(!store.is_loaded());
        assert_eq!(store.dimensions(), None);
    }

    #[test]
    fn test_load_missing_file_leaves_store_empty() {
        let mut store = BitmapStore::new();
        store.create_default(2, 2).unwrap();
        assert!(store.load("no/such/file.png").is_err());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_save_empty_store_fails() {
        let store = BitmapStore::new();
        let path = std::env::temp_dir().join("walkcycle_empty_save.bmp");
        assert!(store.save(&path).is_err());
    }

    #[test]
    fn test_copy_requires_both_surfaces() {
        let mut src = BitmapStore::new();
        let mut dst = BitmapStore::new();
        assert!(src.copy_to(&mut dst).is_err());

        src.create_default(2, 2).unwrap();
        assert!(src.copy_to(&mut dst).is_err());
        assert!(!dst.is_loaded());
    }

    #[test]
    fn test_copy_clips_to_destination() {
        let mut src = BitmapStore::new();
        src.create_default(4, 4).unwrap();
        if let Some(DynamicImage::ImageRgb8(buf)) = src.surface.as_mut() {
            for (x, y, px) in buf.enumerate_pixels_mut() {
                *px = Rgb([x as u8 * 10, y as u8 * 10, 200]);
            }
        }

        let mut dst = BitmapStore::new();
        dst.create(2, 3, 32).unwrap();
        src.copy_to(&mut dst).unwrap();

        let Some(DynamicImage::ImageRgba8(out)) = dst.surface() else {
            panic!("destination layout changed");
        };
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(*out.get_pixel(1, 2), Rgba([10, 20, 200, 255]));
    }

    #[test]
    fn test_take_surface_empties_store() {
        let mut store = BitmapStore::new();
        store.create_default(3, 3).unwrap();
        let surface = store.take_surface().unwrap();
        assert_eq!(surface.width(), 3);
        assert!(!store.is_loaded());
        assert!(store.take_surface().is_none());
    }
}
