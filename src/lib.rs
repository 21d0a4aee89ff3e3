//! Dotswarm renders text as a swarm of particles that morph between procedural layouts.
//!
//! The pipeline:
//!
//! - Load a single-row bitmap font into a [`GlyphTable`]
//! - Lay text out as a [`DotSet`] with [`add_text`]
//! - Apply one of the [`EffectKind`] layouts and let the particles travel frame by frame
//! - Draw each frame through a [`DrawSurface`] (the CPU one is [`CpuSurface`])
//!
//! [`Scene`] holds the whole state; [`Session`] drives it with a command schedule and streams
//! frames into a [`FrameSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Per-frame particle motion.
pub mod animation;
/// JSON scene configuration.
pub mod config;
/// The effect registry.
pub mod effects;
/// Frame sinks.
pub mod encode;
/// Bitmap font loading.
pub mod font;
/// Core types, errors and math helpers.
pub mod foundation;
/// Text-to-dots layout.
pub mod layout;
/// Drawing surfaces.
pub mod render;
/// The scene context object.
pub mod scene;
/// Host frame loop.
pub mod session;

pub use crate::animation::ease::{StepOutcome, step_toward};
pub use crate::animation::morph::MorphMode;
pub use crate::config::{EffectRef, FontConfig, SceneConfig};
pub use crate::effects::library::EffectKind;
pub use crate::effects::registry::EffectCursor;
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::font::glyphs::GlyphTable;
pub use crate::foundation::core::{Dot, DotSet, Point, Rgb8, Vec2, Viewport};
pub use crate::foundation::error::{DotsError, DotsResult};
pub use crate::layout::text::{TextStyle, add_text};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::surface::{DrawSurface, FrameRGBA};
pub use crate::scene::{Command, Scene};
pub use crate::session::{RunStats, ScheduledCommand, Session};
