//! Target layouts for the swarm.
//!
//! Every effect is a pure function of the source dots, the viewport and a random source.

/// The indexed effect library.
pub mod library;
/// Effect cursor and apply operations.
pub mod registry;
