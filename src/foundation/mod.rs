/// Dot sets, colors and the viewport.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Small numeric helpers shared by layout and effects.
pub mod math;
