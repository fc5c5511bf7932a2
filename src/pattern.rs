//! The in-memory pattern model shared by image import and interactive editing.
//!
//! A pattern is a cloth count, an append-only palette of thread colors, and a
//! rectangular grid of cells, each holding either a palette index or nothing.
//! The grid never resizes in place; import and load replace it wholesale.

use std::collections::HashMap;

use crate::catalog::ThreadColor;
use crate::error::PatternError;

/// Reference into a pattern's palette; valid range `[0, palette.len())`.
pub type PaletteIndex = u32;

/// Aida cloth count in stitches per inch. Affects rendering scale only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ClothCount {
    Aida11,
    #[default]
    Aida14,
    Aida18,
    Aida28,
}

impl ClothCount {
    pub fn stitches_per_inch(self) -> u32 {
        u32::from(self)
    }
}

impl From<ClothCount> for u32 {
    fn from(count: ClothCount) -> u32 {
        match count {
            ClothCount::Aida11 => 11,
            ClothCount::Aida14 => 14,
            ClothCount::Aida18 => 18,
            ClothCount::Aida28 => 28,
        }
    }
}

impl TryFrom<u32> for ClothCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(ClothCount::Aida11),
            14 => Ok(ClothCount::Aida14),
            18 => Ok(ClothCount::Aida18),
            28 => Ok(ClothCount::Aida28),
            other => Err(format!("unsupported cloth count {other}")),
        }
    }
}

/// Ordered, deduplicated list of thread colors used by one pattern.
///
/// Append-only: entries stay even if no cell references them anymore, so
/// outstanding indices never dangle. Deduplication is by color value (hex),
/// not by catalog code.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<ThreadColor>,
    by_hex: HashMap<String, PaletteIndex>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a palette from stored entries, e.g. on load.
    /// A duplicated hex keeps its first index in the lookup table.
    pub fn from_entries(entries: Vec<ThreadColor>) -> Self {
        let mut by_hex = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_hex.entry(entry.hex.clone()).or_insert(i as PaletteIndex);
        }
        Self { entries, by_hex }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: PaletteIndex) -> Option<&ThreadColor> {
        self.entries.get(index as usize)
    }

    pub fn entries(&self) -> &[ThreadColor] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThreadColor> {
        self.entries.iter()
    }

    /// Index of the entry matching this color value, if present.
    pub fn index_of_hex(&self, hex: &str) -> Option<PaletteIndex> {
        self.by_hex.get(hex).copied()
    }

    /// Return the index for this color, appending it if it is new.
    ///
    /// This is the only way new indices come into existence; it preserves
    /// the no-duplicate-colors invariant.
    pub fn ensure(&mut self, color: &ThreadColor) -> PaletteIndex {
        if let Some(index) = self.index_of_hex(&color.hex) {
            return index;
        }
        let index = self.entries.len() as PaletteIndex;
        self.entries.push(color.clone());
        self.by_hex.insert(color.hex.clone(), index);
        index
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Rectangular grid of cells, row-major, each an optional palette index.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<PaletteIndex>>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub(crate) fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Option<PaletteIndex>>,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, PatternError> {
        if x >= self.width || y >= self.height {
            return Err(PatternError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Option<PaletteIndex>, PatternError> {
        Ok(self.cells[self.offset(x, y)?])
    }

    pub fn set(&mut self, x: usize, y: usize, index: PaletteIndex) -> Result<(), PatternError> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = Some(index);
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), PatternError> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = None;
        Ok(())
    }

    /// Rows in top-to-bottom order, each a `width`-long slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<PaletteIndex>]> {
        (0..self.height)
            .map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }
}

/// The full editable unit: cloth count, palette, and grid together.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    cloth_count: ClothCount,
    palette: Palette,
    grid: Grid,
}

impl Default for Pattern {
    /// The pattern the editor opens with: 89x70 cells on 14-count cloth.
    fn default() -> Self {
        Self::new(ClothCount::Aida14, 89, 70)
    }
}

impl Pattern {
    pub fn new(cloth_count: ClothCount, width: usize, height: usize) -> Self {
        Self {
            cloth_count,
            palette: Palette::new(),
            grid: Grid::new(width, height),
        }
    }

    pub(crate) fn from_parts(cloth_count: ClothCount, palette: Palette, grid: Grid) -> Self {
        Self {
            cloth_count,
            palette,
            grid,
        }
    }

    pub fn cloth_count(&self) -> ClothCount {
        self.cloth_count
    }

    pub fn set_cloth_count(&mut self, cloth_count: ClothCount) {
        self.cloth_count = cloth_count;
    }

    /// Read-only palette snapshot for rendering and legend display.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Read-only grid snapshot for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stitch a cell with a thread color, resolving or appending its palette
    /// index. This is the CROSS tool path.
    ///
    /// Bounds are checked before the palette is touched, so a failed paint
    /// appends nothing.
    pub fn paint(
        &mut self,
        x: usize,
        y: usize,
        color: &ThreadColor,
    ) -> Result<PaletteIndex, PatternError> {
        self.grid.offset(x, y)?;
        let index = self.palette.ensure(color);
        self.grid.set(x, y, index)?;
        Ok(index)
    }

    /// Set a cell to an existing palette index.
    pub fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        index: PaletteIndex,
    ) -> Result<(), PatternError> {
        if (index as usize) >= self.palette.len() {
            return Err(PatternError::InvalidPaletteIndex {
                index,
                len: self.palette.len(),
            });
        }
        self.grid.set(x, y, index)
    }

    /// Empty a cell. No-op if it is already empty. This is the CLEAR tool path.
    pub fn clear_cell(&mut self, x: usize, y: usize) -> Result<(), PatternError> {
        self.grid.clear(x, y)
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Option<PaletteIndex>, PatternError> {
        self.grid.get(x, y)
    }

    /// The thread color stitched at a cell, if any. This is the PICKER tool path.
    pub fn color_at(&self, x: usize, y: usize) -> Result<Option<&ThreadColor>, PatternError> {
        Ok(self
            .grid
            .get(x, y)?
            .and_then(|index| self.palette.get(index)))
    }

    /// Append a color to the palette (or return its existing index) without
    /// touching the grid. Lets the editor pre-register its draw color.
    pub fn ensure_color(&mut self, color: &ThreadColor) -> PaletteIndex {
        self.palette.ensure(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(dmc: &str, name: &str, hex: &str) -> ThreadColor {
        ThreadColor {
            dmc: dmc.to_string(),
            name: name.to_string(),
            hex: hex.to_string(),
        }
    }

    #[test]
    fn test_cloth_count_conversions() {
        assert_eq!(ClothCount::default(), ClothCount::Aida14);
        assert_eq!(ClothCount::Aida18.stitches_per_inch(), 18);
        assert_eq!(ClothCount::try_from(28).unwrap(), ClothCount::Aida28);
        assert!(ClothCount::try_from(13).is_err());
    }

    #[test]
    fn test_palette_dedups_by_hex() {
        let mut palette = Palette::new();
        let red = thread("321", "Red", "#CE1938");
        let black = thread("310", "Black", "#000000");
        // Different code, same color value as red
        let alias = thread("666", "Bright Red", "#CE1938");

        assert_eq!(palette.ensure(&red), 0);
        assert_eq!(palette.ensure(&black), 1);
        assert_eq!(palette.ensure(&red), 0);
        assert_eq!(palette.ensure(&alias), 0);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0).unwrap().dmc, "321");
    }

    #[test]
    fn test_grid_set_get_clear() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.get(2, 1).unwrap(), None);

        grid.set(2, 1, 7).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Some(7));

        // Setting the same index again changes nothing
        grid.set(2, 1, 7).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Some(7));

        grid.clear(2, 1).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), None);
        // Clearing an empty cell is a no-op
        grid.clear(2, 1).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), None);
    }

    #[test]
    fn test_grid_rejects_out_of_bounds() {
        let mut grid = Grid::new(4, 3);
        grid.set(0, 0, 1).unwrap();

        for (x, y) in [(4, 0), (0, 3), (4, 3), (usize::MAX, 0)] {
            assert!(matches!(
                grid.get(x, y),
                Err(PatternError::OutOfBounds { .. })
            ));
            assert!(matches!(
                grid.set(x, y, 0),
                Err(PatternError::OutOfBounds { .. })
            ));
            assert!(matches!(
                grid.clear(x, y),
                Err(PatternError::OutOfBounds { .. })
            ));
        }

        // Failed operations left the grid untouched
        assert_eq!(grid.get(0, 0).unwrap(), Some(1));
    }

    #[test]
    fn test_grid_rows_are_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, 3).unwrap();
        grid.set(0, 1, 5).unwrap();

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[None, Some(3)][..], &[Some(5), None][..]]);
    }

    #[test]
    fn test_default_pattern_shape() {
        let pattern = Pattern::default();
        assert_eq!(pattern.grid().width(), 89);
        assert_eq!(pattern.grid().height(), 70);
        assert_eq!(pattern.cloth_count(), ClothCount::Aida14);
        assert!(pattern.palette().is_empty());
    }

    #[test]
    fn test_paint_appends_once_and_reuses() {
        let mut pattern = Pattern::new(ClothCount::Aida14, 3, 3);
        let black = thread("310", "Black", "#000000");
        let red = thread("321", "Red", "#CE1938");

        assert_eq!(pattern.paint(0, 0, &black).unwrap(), 0);
        assert_eq!(pattern.paint(1, 0, &red).unwrap(), 1);
        assert_eq!(pattern.paint(2, 0, &black).unwrap(), 0);
        assert_eq!(pattern.palette().len(), 2);

        assert_eq!(pattern.cell(2, 0).unwrap(), Some(0));
        assert_eq!(pattern.color_at(1, 0).unwrap().unwrap().dmc, "321");
        assert_eq!(pattern.color_at(2, 2).unwrap(), None);
    }

    #[test]
    fn test_paint_out_of_bounds_leaves_palette_alone() {
        let mut pattern = Pattern::new(ClothCount::Aida14, 2, 2);
        let black = thread("310", "Black", "#000000");

        assert!(matches!(
            pattern.paint(5, 0, &black),
            Err(PatternError::OutOfBounds { .. })
        ));
        assert!(pattern.palette().is_empty());
    }

    #[test]
    fn test_set_cell_validates_palette_index() {
        let mut pattern = Pattern::new(ClothCount::Aida14, 2, 2);
        let black = thread("310", "Black", "#000000");
        let index = pattern.ensure_color(&black);

        pattern.set_cell(0, 1, index).unwrap();
        assert_eq!(pattern.cell(0, 1).unwrap(), Some(index));

        assert!(matches!(
            pattern.set_cell(0, 0, 9),
            Err(PatternError::InvalidPaletteIndex { index: 9, len: 1 })
        ));
        assert_eq!(pattern.cell(0, 0).unwrap(), None);

        pattern.clear_cell(0, 1).unwrap();
        assert_eq!(pattern.cell(0, 1).unwrap(), None);
        // Palette entries are never removed
        assert_eq!(pattern.palette().len(), 1);
    }
}
