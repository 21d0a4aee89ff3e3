//! Turning strings into source dots.

/// Text-to-dots layout.
pub mod text;
