//! Per-frame particle motion.

/// Constant-speed stepping toward a goal layout.
pub mod ease;
/// Which way particles travel between the source and the effect layout.
pub mod morph;
