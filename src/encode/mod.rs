//! Frame sinks.
//!
//! Sinks consume rendered frames in order and are driven by [`crate::session::Session`].

/// Frame sink trait and built-in sinks.
pub mod sink;
