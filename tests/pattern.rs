use std::io::Cursor;

use crosshatch::{catalog, ClothCount, Pattern, PatternError};
use image::{ImageFormat, Rgba, RgbaImage};

fn png_bytes(pixels: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for (i, px) in pixels.iter().enumerate() {
        img.put_pixel(i as u32 % width, i as u32 / width, Rgba(*px));
    }
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

#[test]
fn editing_session_smoke_test() {
    let mut pattern = Pattern::default();
    assert_eq!(pattern.grid().width(), 89);
    assert_eq!(pattern.grid().height(), 70);

    let black = catalog::by_code("310").unwrap();
    let royal = catalog::by_code("797").unwrap();

    // Paint, pick, repaint, clear
    let black_idx = pattern.paint(3, 4, black).unwrap();
    let royal_idx = pattern.paint(4, 4, royal).unwrap();
    assert_ne!(black_idx, royal_idx);

    let picked = pattern.color_at(4, 4).unwrap().unwrap().clone();
    pattern.paint(5, 4, &picked).unwrap();
    assert_eq!(pattern.cell(5, 4).unwrap(), Some(royal_idx));
    assert_eq!(pattern.palette().len(), 2);

    pattern.clear_cell(3, 4).unwrap();
    assert_eq!(pattern.cell(3, 4).unwrap(), None);
    // Clearing never shrinks the palette
    assert_eq!(pattern.palette().len(), 2);
}

#[test]
fn out_of_bounds_never_mutates() {
    let mut pattern = Pattern::new(ClothCount::Aida14, 10, 10);
    let black = catalog::by_code("310").unwrap();
    pattern.paint(9, 9, black).unwrap();
    let before = pattern.clone();

    assert!(matches!(
        pattern.paint(10, 0, black),
        Err(PatternError::OutOfBounds { .. })
    ));
    assert!(matches!(
        pattern.clear_cell(0, 10),
        Err(PatternError::OutOfBounds { .. })
    ));
    assert!(matches!(
        pattern.cell(10, 10),
        Err(PatternError::OutOfBounds { .. })
    ));
    assert_eq!(pattern, before);
}

#[test]
fn import_png_one_cell_per_pixel() {
    let bytes = png_bytes(
        &[[255, 0, 0, 255], [0, 0, 255, 255]],
        2,
        1,
    );

    let mut pattern = Pattern::default();
    pattern.import_image(&bytes).unwrap();

    assert_eq!(pattern.grid().width(), 2);
    assert_eq!(pattern.grid().height(), 1);
    assert_eq!(pattern.palette().len(), 2);
    assert_eq!(pattern.cell(0, 0).unwrap(), Some(0));
    assert_eq!(pattern.cell(1, 0).unwrap(), Some(1));
    assert_eq!(pattern.palette().get(0).unwrap(), catalog::closest([255, 0, 0]));
    assert_eq!(pattern.palette().get(1).unwrap(), catalog::closest([0, 0, 255]));
}

#[test]
fn import_then_save_then_load_roundtrip() {
    let bytes = png_bytes(
        &[
            [255, 0, 0, 255],
            [0, 0, 255, 255],
            [255, 0, 0, 255],
            [0, 0, 0, 255],
        ],
        2,
        2,
    );

    let mut pattern = Pattern::new(ClothCount::Aida28, 1, 1);
    pattern.import_image(&bytes).unwrap();

    let json = pattern.to_json().unwrap();
    let loaded = Pattern::from_json(&json).unwrap();
    assert_eq!(loaded, pattern);
    assert_eq!(loaded.cloth_count(), ClothCount::Aida28);

    // Loaded patterns stay editable with stable indices
    let mut loaded = loaded;
    let existing = loaded.cell(0, 0).unwrap().unwrap();
    loaded.set_cell(1, 1, existing).unwrap();
    assert_eq!(loaded.cell(1, 1).unwrap(), Some(existing));
}

#[test]
fn repeated_imports_are_identical() {
    let mut pixels = Vec::new();
    for i in 0..96u32 {
        pixels.push([
            (i * 7 % 256) as u8,
            (i * 13 % 256) as u8,
            (i * 29 % 256) as u8,
            255,
        ]);
    }
    let bytes = png_bytes(&pixels, 12, 8);

    let mut first = Pattern::default();
    first.import_image(&bytes).unwrap();
    let mut second = Pattern::default();
    second.import_image(&bytes).unwrap();

    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn matcher_always_returns_a_catalog_entry() {
    for rgb in [
        [0u8, 0, 0],
        [255, 255, 255],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [137, 42, 200],
    ] {
        let matched = catalog::closest(rgb);
        assert!(catalog::all().iter().any(|t| t == matched));
        assert_eq!(catalog::closest(rgb), matched);
    }
}
