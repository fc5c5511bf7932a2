use thiserror::Error;

/// Errors reported by the pattern core.
///
/// Every failing operation leaves the pattern it was called on unchanged.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid color {input:?}: expected #RRGGBB")]
    InvalidColor { input: String },

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    MalformedImageBuffer {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("coordinates ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("palette index {index} out of range (palette has {len} entries)")]
    InvalidPaletteIndex { index: u32, len: usize },

    #[error("corrupt save: {0}")]
    CorruptSave(String),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
}
