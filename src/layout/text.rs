use unicode_segmentation::UnicodeSegmentation as _;

use crate::font::glyphs::GlyphTable;
use crate::foundation::core::DotSet;
use crate::foundation::error::{DotsError, DotsResult};

/// Placement and sampling parameters for [`add_text`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Horizontal anchor; the text is centered on it.
    pub x: f64,
    /// Vertical anchor; glyph cells are centered on it.
    pub y: f64,
    /// Side of the square each ink pixel expands into.
    pub size: f64,
    /// Extra gap between neighbouring glyph pixels.
    pub offset: f64,
    /// Distance between samples inside a square (`>= 1`).
    pub step: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size: 15.0,
            offset: 0.0,
            step: 1.0,
        }
    }
}

impl TextStyle {
    /// Reject values that would stall or explode the sampler.
    pub fn validate(&self) -> DotsResult<()> {
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("size", self.size),
            ("offset", self.offset),
        ] {
            if !v.is_finite() {
                return Err(DotsError::validation(format!(
                    "text {name} must be finite, got {v}"
                )));
            }
        }
        if !self.step.is_finite() || self.step < 1.0 {
            return Err(DotsError::validation(format!(
                "text step must be >= 1, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Distance between the anchors of neighbouring characters.
    pub fn letter_spacing(&self, glyphs: &GlyphTable) -> f64 {
        (self.size + self.offset) * f64::from(glyphs.cell_advance())
    }

    /// Number of dots one ink pixel expands into.
    pub fn samples_per_square(&self) -> usize {
        let per_axis = samples_per_axis(self.size, self.step);
        per_axis * per_axis
    }
}

/// Append the dots for `text` to `dots` and return how many were added.
///
/// Text is split into user-perceived characters; each one takes one glyph cell, and
/// characters outside the font's alphabet take a blank cell. Existing dots are kept.
pub fn add_text(
    dots: &mut DotSet,
    text: &str,
    glyphs: &GlyphTable,
    style: &TextStyle,
) -> DotsResult<usize> {
    style.validate()?;
    let before = dots.len();

    let letters: Vec<&str> = text.graphemes(true).collect();
    let count = letters.len();
    if count == 0 {
        return Ok(0);
    }

    let spacing = style.letter_spacing(glyphs);
    let start_x = style.x - spacing * ((count as f64 - 1.0) / 2.0);

    for (i, letter) in letters.iter().enumerate() {
        let index = glyphs.letter_index(letter);
        add_letter(dots, glyphs, index, start_x + i as f64 * spacing, style);
    }

    let added = dots.len() - before;
    tracing::debug!(letters = count, dots = added, "text laid out");
    Ok(added)
}

fn add_letter(dots: &mut DotSet, glyphs: &GlyphTable, index: usize, x: f64, style: &TextStyle) {
    let half_width = f64::from(glyphs.cell_width() / 2);
    let half_height = f64::from(glyphs.cell_height() / 2);
    let size_offset = style.size + style.offset;

    for px in glyphs.ink_pixels(index) {
        let cx = x + (f64::from(px.col) - half_width) * size_offset;
        let cy = style.y + (f64::from(px.row) - half_height) * size_offset + style.size / 2.0;
        add_square(dots, style.size, cx, cy, style.step);
    }
}

/// Slack for offsets that land on the far edge of a square up to rounding.
const EDGE_EPSILON: f64 = 1e-9;

// Offsets `1, 1 + step, ...` that stay within `size`.
fn samples_per_axis(size: f64, step: f64) -> usize {
    if size < 1.0 {
        return 0;
    }
    ((size - 1.0) / step + EDGE_EPSILON).floor() as usize + 1
}

// Samples start one unit into the square, so step > size leaves a single dot near the
// top-left corner.
fn add_square(dots: &mut DotSet, size: f64, x: f64, y: f64, step: f64) {
    let half = size / 2.0;
    let start_x = x - half;
    let start_y = y - half;
    let per_axis = samples_per_axis(size, step);

    for row in 0..per_axis {
        let iy = 1.0 + row as f64 * step;
        for col in 0..per_axis {
            dots.push(start_x + 1.0 + col as f64 * step, start_y + iy);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
