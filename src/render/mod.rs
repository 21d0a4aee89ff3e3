//! Drawing surfaces for the render step.

/// Surface trait and frame readback type.
pub mod surface;
/// CPU surface powered by `vello_cpu`.
pub mod cpu;
/// Command-recording surface for tests and diagnostics.
pub mod recording;
