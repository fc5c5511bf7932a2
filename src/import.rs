//! Raster image import: quantize an RGBA buffer to a palette and grid.
//!
//! Every pixel maps to its closest catalog color; the palette collects the
//! distinct matched colors in first-encounter order under a row-major scan.
//! The per-pixel matching is parallelized with rayon, but the palette-append
//! step is a single serial fold over the matched results, so insertion order
//! and grid contents are bit-for-bit identical to a fully serial scan.

use rayon::prelude::*;

use crate::catalog::{self, ThreadColor};
use crate::error::PatternError;
use crate::pattern::{Grid, Palette, Pattern};

/// Quantize a decoded RGBA buffer (row-major, 4 bytes per pixel, top-left
/// origin, alpha ignored) into a palette and a fully populated grid.
pub fn build_pattern_from_rgba(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(Palette, Grid), PatternError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(PatternError::MalformedImageBuffer {
            len: pixels.len(),
            width,
            height,
        })?;
    if pixels.len() != expected {
        return Err(PatternError::MalformedImageBuffer {
            len: pixels.len(),
            width,
            height,
        });
    }

    let matched: Vec<&'static ThreadColor> = pixels
        .par_chunks_exact(4)
        .map(|p| catalog::closest([p[0], p[1], p[2]]))
        .collect();

    let mut palette = Palette::new();
    let mut cells = Vec::with_capacity(width * height);
    for color in &matched {
        cells.push(Some(palette.ensure(color)));
    }

    Ok((palette, Grid::from_cells(width, height, cells)))
}

/// Decode image bytes (PNG, JPEG, etc.) to an RGBA buffer plus dimensions.
pub fn decode_rgba(bytes: &[u8]) -> Result<(Vec<u8>, usize, usize), PatternError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    Ok((rgba.into_raw(), width, height))
}

impl Pattern {
    /// Replace this pattern's palette and grid with a quantized image.
    ///
    /// The build runs to completion before anything is swapped in; on error
    /// the existing pattern is untouched. Cloth count is kept.
    pub fn import_rgba(
        &mut self,
        pixels: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), PatternError> {
        let (palette, grid) = build_pattern_from_rgba(pixels, width, height)?;
        log::info!(
            "imported {width}x{height} image, {} distinct thread colors",
            palette.len()
        );
        *self = Pattern::from_parts(self.cloth_count(), palette, grid);
        Ok(())
    }

    /// Decode image bytes and import them, one grid cell per source pixel.
    pub fn import_image(&mut self, bytes: &[u8]) -> Result<(), PatternError> {
        let (pixels, width, height) = decode_rgba(bytes)?;
        self.import_rgba(&pixels, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ClothCount;

    #[test]
    fn test_identical_pixels_share_one_entry() {
        let pixels = [255, 0, 0, 255, 255, 0, 0, 255];
        let (palette, grid) = build_pattern_from_rgba(&pixels, 2, 1).unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(grid.get(0, 0).unwrap(), Some(0));
        assert_eq!(grid.get(1, 0).unwrap(), Some(0));
        assert_eq!(palette.get(0).unwrap(), catalog::closest([255, 0, 0]));
    }

    #[test]
    fn test_distinct_pixels_get_scan_order_indices() {
        let pixels = [255, 0, 0, 255, 0, 0, 255, 255];
        let (palette, grid) = build_pattern_from_rgba(&pixels, 2, 1).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(grid.get(0, 0).unwrap(), Some(0));
        assert_eq!(grid.get(1, 0).unwrap(), Some(1));
        assert_eq!(palette.get(0).unwrap(), catalog::closest([255, 0, 0]));
        assert_eq!(palette.get(1).unwrap(), catalog::closest([0, 0, 255]));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let pixels = [10, 20, 30, 255, 10, 20, 30, 0];
        let (palette, _) = build_pattern_from_rgba(&pixels, 2, 1).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let pixels = [0u8; 12];
        assert!(matches!(
            build_pattern_from_rgba(&pixels, 2, 2),
            Err(PatternError::MalformedImageBuffer {
                len: 12,
                width: 2,
                height: 2,
            })
        ));
    }

    #[test]
    fn test_import_is_reproducible() {
        // Gradient with repeated colors, wide enough to exercise the
        // parallel matching stage
        let width = 64;
        let height = 16;
        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 4) as u8, (y * 16) as u8, 128, 255]);
            }
        }

        let (palette_a, grid_a) = build_pattern_from_rgba(&pixels, width, height).unwrap();
        let (palette_b, grid_b) = build_pattern_from_rgba(&pixels, width, height).unwrap();
        assert_eq!(palette_a, palette_b);
        assert_eq!(grid_a, grid_b);

        // No cell left empty, every index in range
        for row in grid_a.rows() {
            for cell in row {
                let index = cell.expect("import fills every cell");
                assert!((index as usize) < palette_a.len());
            }
        }
    }

    #[test]
    fn test_builder_palette_has_no_duplicate_colors() {
        let mut pixels = Vec::new();
        for v in 0u8..=255 {
            pixels.extend_from_slice(&[v, v / 2, 255 - v, 255]);
        }
        let (palette, _) = build_pattern_from_rgba(&pixels, 16, 16).unwrap();

        for (i, a) in palette.iter().enumerate() {
            for b in palette.entries().iter().skip(i + 1) {
                assert_ne!(a.hex, b.hex);
            }
        }
    }

    #[test]
    fn test_import_replaces_pattern_and_keeps_cloth_count() {
        let mut pattern = Pattern::new(ClothCount::Aida18, 5, 5);
        pattern
            .paint(0, 0, catalog::by_code("310").unwrap())
            .unwrap();

        let pixels = [255, 0, 0, 255, 0, 0, 255, 255];
        pattern.import_rgba(&pixels, 2, 1).unwrap();

        assert_eq!(pattern.cloth_count(), ClothCount::Aida18);
        assert_eq!(pattern.grid().width(), 2);
        assert_eq!(pattern.grid().height(), 1);
        assert_eq!(pattern.palette().len(), 2);
    }

    #[test]
    fn test_failed_import_leaves_pattern_unchanged() {
        let mut pattern = Pattern::new(ClothCount::Aida14, 2, 2);
        pattern
            .paint(1, 1, catalog::by_code("321").unwrap())
            .unwrap();
        let before = pattern.clone();

        let short = [0u8; 4];
        assert!(pattern.import_rgba(&short, 2, 2).is_err());
        assert!(pattern.import_image(b"definitely not an image").is_err());
        assert_eq!(pattern, before);
    }
}
