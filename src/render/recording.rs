use crate::foundation::core::{Dot, Rgb8, Viewport};
use crate::foundation::error::DotsResult;
use crate::render::surface::{DrawSurface, FrameRGBA};

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// `begin_frame` with the given viewport.
    Begin(Viewport),
    /// `fill_background` with the given color.
    Background(Rgb8),
    /// `fill_dots` with a copy of the dots.
    Dots {
        /// Dots painted.
        dots: Vec<Dot>,
        /// Paint color.
        color: Rgb8,
    },
    /// `end_frame`.
    End,
}

/// Surface that records calls instead of drawing. `end_frame` returns a 1x1 frame holding
/// the last background color.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_frame(&mut self, viewport: &Viewport) -> DotsResult<()> {
        viewport.validate()?;
        self.ops.push(SurfaceOp::Begin(*viewport));
        Ok(())
    }

    fn fill_background(&mut self, color: Rgb8) {
        self.ops.push(SurfaceOp::Background(color));
    }

    fn fill_dots(&mut self, dots: &[Dot], color: Rgb8) {
        self.ops.push(SurfaceOp::Dots {
            dots: dots.to_vec(),
            color,
        });
    }

    fn end_frame(&mut self) -> DotsResult<FrameRGBA> {
        self.ops.push(SurfaceOp::End);
        let bg = self
            .ops
            .iter()
            .rev()
            .find_map(|op| match op {
                SurfaceOp::Background(c) => Some(*c),
                _ => None,
            })
            .unwrap_or(Rgb8::BLACK);
        Ok(FrameRGBA {
            width: 1,
            height: 1,
            data: bg.to_rgba8().to_vec(),
            premultiplied: true,
        })
    }
}
