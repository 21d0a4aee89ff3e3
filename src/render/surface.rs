use crate::foundation::core::{Dot, Rgb8, Viewport};
use crate::foundation::error::DotsResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are fully opaque, so premultiplied and straight alpha coincide; the flag is kept
/// to make the convention explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of pixel `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Drawing surface the render step paints into.
///
/// Each call is self-contained: transforms and paints set for one call never leak into
/// the next.
pub trait DrawSurface {
    /// Start a frame, resizing the backing store to the viewport's device pixel size.
    ///
    /// Calling it every frame with the same viewport is cheap.
    fn begin_frame(&mut self, viewport: &Viewport) -> DotsResult<()>;

    /// Fill the whole surface with `color`.
    fn fill_background(&mut self, color: Rgb8);

    /// Paint every dot as a 1x1 square in `color`, with `(0, 0)` at the viewport center.
    fn fill_dots(&mut self, dots: &[Dot], color: Rgb8);

    /// Finish the frame and read back its pixels.
    fn end_frame(&mut self) -> DotsResult<FrameRGBA>;
}
