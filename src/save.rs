//! The textual save shape and its structural validation.
//!
//! A save is a single JSON object `{clothCount, palette, crosses}` with
//! row-major `crosses` and `null` for empty cells. The persistence layer
//! owns storage; this module owns the shape and the invariant checks that
//! keep a loaded pattern from ever holding a dangling index.

use serde::{Deserialize, Serialize};

use crate::catalog::ThreadColor;
use crate::error::PatternError;
use crate::pattern::{ClothCount, Grid, Palette, PaletteIndex, Pattern};

/// Serialized pattern triple, round-trippable through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
    pub cloth_count: ClothCount,
    pub palette: Vec<ThreadColor>,
    pub crosses: Vec<Vec<Option<PaletteIndex>>>,
}

impl Pattern {
    /// The current triple in its serializable shape.
    pub fn to_save(&self) -> SaveFile {
        SaveFile {
            cloth_count: self.cloth_count(),
            palette: self.palette().entries().to_vec(),
            crosses: self.grid().rows().map(<[_]>::to_vec).collect(),
        }
    }

    /// Rebuild a pattern from a deserialized save, validating structure.
    ///
    /// Fails with `CorruptSave` if the grid is not rectangular or any cell
    /// references an index outside the stored palette.
    pub fn from_save(save: SaveFile) -> Result<Pattern, PatternError> {
        let height = save.crosses.len();
        let width = save.crosses.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in save.crosses.iter().enumerate() {
            if row.len() != width {
                return Err(PatternError::CorruptSave(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, cell) in row.iter().enumerate() {
                if let Some(index) = cell {
                    if (*index as usize) >= save.palette.len() {
                        return Err(PatternError::CorruptSave(format!(
                            "cell ({x}, {y}) references palette index {index}, \
                             but the palette has {} entries",
                            save.palette.len()
                        )));
                    }
                }
                cells.push(*cell);
            }
        }

        log::debug!(
            "loaded {width}x{height} pattern with {} palette entries",
            save.palette.len()
        );

        Ok(Pattern::from_parts(
            save.cloth_count,
            Palette::from_entries(save.palette),
            Grid::from_cells(width, height, cells),
        ))
    }

    /// Serialize the current triple to the JSON save format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_save())
    }

    /// Parse and validate a JSON save. A save that does not parse is as
    /// corrupt as one with broken structure.
    pub fn from_json(json: &str) -> Result<Pattern, PatternError> {
        let save: SaveFile = serde_json::from_str(json)
            .map_err(|err| PatternError::CorruptSave(err.to_string()))?;
        Pattern::from_save(save)
    }
}
