//! Bitmap store integration tests: file round trips and surface copies.

use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use walkcycle::resources::bitmapstore::BitmapStore;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("walkcycle_bitmap_{}_{}", std::process::id(), name))
}

struct Cleanup(Vec<PathBuf>);

impl Drop for Cleanup {
    fn drop(&mut self) {
        for path in &self.0 {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn pattern_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 7 % 256) as u8,
            (y * 13 % 256) as u8,
            ((x ^ y) % 256) as u8,
        ])
    })
}

#[test]
fn load_save_load_is_bit_exact_for_rgb24() {
    let png = temp_path("roundtrip.png");
    let bmp = temp_path("roundtrip.bmp");
    let _cleanup = Cleanup(vec![png.clone(), bmp.clone()]);

    let original = pattern_rgb(37, 21);
    original.save(&png).unwrap();

    let mut store = BitmapStore::new();
    store.load(&png).unwrap();
    store.save(&bmp).unwrap();

    let mut reloaded = BitmapStore::new();
    reloaded.load(&bmp).unwrap();
    let surface = reloaded.surface().unwrap();
    assert_eq!(surface.dimensions(), (37, 21));
    assert_eq!(surface.to_rgb8().as_raw(), original.as_raw());
}

#[test]
fn created_surface_saves_as_black_bitmap() {
    let bmp = temp_path("blank.bmp");
    let _cleanup = Cleanup(vec![bmp.clone()]);

    let mut store = BitmapStore::new();
    store.create_default(16, 9).unwrap();
    store.save(&bmp).unwrap();

    let decoded = image::open(&bmp).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (16, 9));
    assert!(decoded.pixels().all(|p| *p == Rgb([0, 0, 0])));
}

#[test]
fn copy_matches_source_inside_overlap() {
    let png = temp_path("overlap.png");
    let _cleanup = Cleanup(vec![png.clone()]);
    pattern_rgb(40, 30).save(&png).unwrap();

    let mut src = BitmapStore::new();
    src.load(&png).unwrap();

    for (w, h) in [(25, 50), (40, 30), (64, 12)] {
        let mut dst = BitmapStore::new();
        dst.create_default(w, h).unwrap();
        src.copy_to(&mut dst).unwrap();

        let a = src.surface().unwrap();
        let b = dst.surface().unwrap();
        assert_eq!(b.dimensions(), (w, h));
        for y in 0..h.min(30) {
            for x in 0..w.min(40) {
                assert_eq!(a.get_pixel(x, y), b.get_pixel(x, y), "({}, {})", x, y);
            }
        }
        // Outside the overlap the destination keeps its own pixels.
        if w > 40 {
            assert_eq!(b.get_pixel(40, 0), Rgba([0, 0, 0, 255]));
        }
    }
}

#[test]
fn sprite_sheet_copied_into_blank_canvas_survives_save() {
    let sheet = temp_path("ss.png");
    let bmp = temp_path("canvas.bmp");
    let _cleanup = Cleanup(vec![sheet.clone(), bmp.clone()]);

    RgbaImage::from_fn(576, 256, |x, y| {
        Rgba([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8, 255])
    })
    .save(&sheet)
    .unwrap();

    let mut source = BitmapStore::new();
    source.load(&sheet).unwrap();
    let mut canvas = BitmapStore::new();
    canvas.create_default(512, 512).unwrap();
    source.copy_to(&mut canvas).unwrap();
    canvas.save(&bmp).unwrap();

    let saved = image::open(&bmp).unwrap().to_rgb8();
    let original = source.surface().unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (512, 512));
    for y in 0..256 {
        for x in 0..512 {
            assert_eq!(saved.get_pixel(x, y), original.get_pixel(x, y));
        }
    }
    assert_eq!(*saved.get_pixel(0, 300), Rgb([0, 0, 0]));
}

#[test]
fn reload_replaces_previous_surface() {
    let small = temp_path("small.png");
    let big = temp_path("big.png");
    let _cleanup = Cleanup(vec![small.clone(), big.clone()]);
    pattern_rgb(4, 4).save(&small).unwrap();
    pattern_rgb(9, 3).save(&big).unwrap();

    let mut store = BitmapStore::new();
    store.load(&small).unwrap();
    store.load(&big).unwrap();
    assert_eq!(store.dimensions(), Some((9, 3)));
    assert!(matches!(store.surface(), Some(DynamicImage::ImageRgb8(_))));
}
