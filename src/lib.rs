//! Cross-stitch pattern core.
//!
//! The two halves the editor and the importer share:
//! - the quantization engine: a fixed DMC thread-color catalog, a CIEDE2000
//!   nearest-color matcher, and the image-to-pattern builder
//! - the pattern model: cloth count, append-only palette, and the grid of
//!   cells that both interactive painting and import mutate
//!
//! Rendering, UI controls, and storage live outside this crate; they consume
//! the read-only snapshots and the serializable save shape exposed here.

pub mod catalog;
mod error;
mod import;
mod pattern;
mod save;

pub use catalog::ThreadColor;
pub use error::PatternError;
pub use import::{build_pattern_from_rgba, decode_rgba};
pub use pattern::{ClothCount, Grid, Palette, PaletteIndex, Pattern};
pub use save::SaveFile;
