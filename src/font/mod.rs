//! Bitmap font loading.
//!
//! A font is a single-row atlas image of fixed-size cells, one per alphabet character,
//! separated by one blank column.

/// Built-in 5x8 atlas.
pub mod builtin;
/// Atlas decoding and ink lookup.
pub mod glyphs;
