use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{DotsError, DotsResult};

/// Ink pixel inside a glyph cell, as `(column, row)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphPixel {
    /// Column within the cell, `0..cell_width`.
    pub col: u32,
    /// Row within the cell, `0..cell_height`.
    pub row: u32,
}

/// Immutable lookup from alphabet characters to the ink pixels of their cells.
///
/// Cell `i` occupies atlas columns `i * (cell_width + 1) .. i * (cell_width + 1) + cell_width`;
/// the column after each cell is a separator and never counts as ink. A character outside
/// the alphabet resolves to [`GlyphTable::blank_index`], a cell past the last glyph that has
/// no ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    alphabet: String,
    letters: Vec<char>,
    cell_width: u32,
    cell_height: u32,
    atlas_width: u32,
    atlas_height: u32,
    ink: Vec<bool>,
    cells: Vec<Vec<GlyphPixel>>,
}

impl GlyphTable {
    /// Decode an encoded atlas (PNG, BMP, ...) and build the table.
    pub fn from_bytes(
        bytes: &[u8],
        alphabet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> DotsResult<Self> {
        let img = image::load_from_memory(bytes).context("decode glyph atlas from memory")?;
        Self::from_image(&img.to_rgba8(), alphabet, cell_width, cell_height)
    }

    /// Read and decode an atlas file.
    pub fn load(
        path: impl AsRef<Path>,
        alphabet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> DotsResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read glyph atlas '{}'", path.display()))?;
        Self::from_bytes(&bytes, alphabet, cell_width, cell_height)
    }

    /// Build the table from decoded RGBA pixels.
    ///
    /// A pixel is ink when its red, green and blue channels are all zero; alpha is ignored.
    #[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
    pub fn from_image(
        image: &image::RgbaImage,
        alphabet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> DotsResult<Self> {
        let letters: Vec<char> = alphabet.chars().collect();
        if letters.is_empty() {
            return Err(DotsError::config("font alphabet must not be empty"));
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(DotsError::config(format!(
                "glyph cell must be non-empty, got {cell_width}x{cell_height}"
            )));
        }

        let (atlas_width, atlas_height) = image.dimensions();
        let needed_width = (letters.len() as u64) * u64::from(cell_width + 1) - 1;
        if u64::from(atlas_width) < needed_width || atlas_height < cell_height {
            return Err(DotsError::config(format!(
                "glyph atlas is {atlas_width}x{atlas_height} but {} glyphs of \
                 {cell_width}x{cell_height} need at least {needed_width}x{cell_height}",
                letters.len()
            )));
        }

        let ink: Vec<bool> = image
            .pixels()
            .map(|px| px.0[0] == 0 && px.0[1] == 0 && px.0[2] == 0)
            .collect();

        let mut table = Self {
            alphabet: alphabet.to_string(),
            letters,
            cell_width,
            cell_height,
            atlas_width,
            atlas_height,
            ink,
            cells: Vec::new(),
        };

        let cells = (0..table.letters.len())
            .map(|index| {
                let mut pixels = Vec::new();
                for row in 0..cell_height {
                    for col in 0..cell_width {
                        if table.is_ink(index, col, row) {
                            pixels.push(GlyphPixel { col, row });
                        }
                    }
                }
                pixels
            })
            .collect();
        table.cells = cells;

        tracing::debug!(
            glyphs = table.letters.len(),
            ink_pixels = table.cells.iter().map(Vec::len).sum::<usize>(),
            "glyph table built"
        );
        Ok(table)
    }

    /// The alphabet the table was built from.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Number of real glyphs.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Glyph cell width in atlas pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Glyph cell height in atlas pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Horizontal advance between cells in atlas pixels (cell plus separator).
    pub fn cell_advance(&self) -> u32 {
        self.cell_width + 1
    }

    /// Index of the blank "missing glyph" cell.
    pub fn blank_index(&self) -> usize {
        self.letters.len()
    }

    /// Cell index for `letter`, or [`Self::blank_index`] when it is not in the alphabet.
    pub fn char_index(&self, letter: char) -> usize {
        self.letters
            .iter()
            .position(|&c| c == letter)
            .unwrap_or(self.letters.len())
    }

    /// Cell index for a user-perceived character.
    ///
    /// Only clusters made of exactly one alphabet character resolve to a real cell.
    pub fn letter_index(&self, grapheme: &str) -> usize {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.char_index(c),
            _ => self.blank_index(),
        }
    }

    /// Return `true` when pixel `(x, y)` of cell `index` is ink.
    ///
    /// Coordinates outside the cell, the blank cell and cells outside the atlas are never ink.
    pub fn is_ink(&self, index: usize, x: u32, y: u32) -> bool {
        if index >= self.letters.len() || x >= self.cell_width || y >= self.cell_height {
            return false;
        }
        let ax = (index as u64) * u64::from(self.cell_advance()) + u64::from(x);
        if ax >= u64::from(self.atlas_width) || y >= self.atlas_height {
            return false;
        }
        self.ink[(y as usize) * (self.atlas_width as usize) + ax as usize]
    }

    /// Ink pixels of cell `index` in row-major order; empty for the blank cell.
    pub fn ink_pixels(&self, index: usize) -> &[GlyphPixel] {
        self.cells.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/glyphs.rs"]
mod tests;
