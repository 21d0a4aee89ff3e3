use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{DotsError, DotsResult};
use crate::render::surface::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// Sink contract for consuming rendered frames.
///
/// `push_frame` is called with strictly increasing frame numbers between one `begin` and
/// one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> DotsResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> DotsResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> DotsResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> DotsResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> DotsResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> DotsResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `<dir>/<prefix><index>.png` with the index zero-padded to 5 digits.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path the frame `idx` is written to.
    pub fn frame_path(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}{idx:05}.png", self.prefix))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> DotsResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output directory '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> DotsResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(DotsError::render("png sink received a frame before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(DotsError::render(format!(
                "frame {idx} is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> DotsResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

/// Encode one frame as an RGBA PNG at `path`.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> DotsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
