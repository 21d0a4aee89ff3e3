use crate::foundation::core::{Dot, Rgb8, Viewport};
use crate::foundation::error::{DotsError, DotsResult};
use crate::render::surface::{DrawSurface, FrameRGBA};

/// CPU raster surface powered by `vello_cpu`.
pub struct CpuSurface {
    viewport: Viewport,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Create a surface sized for `viewport`.
    pub fn new(viewport: &Viewport) -> DotsResult<Self> {
        viewport.validate()?;
        let (width, height) = device_size_u16(viewport)?;
        Ok(Self {
            viewport: *viewport,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Viewport of the frame in progress.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn center_transform(&self) -> vello_cpu::kurbo::Affine {
        vello_cpu::kurbo::Affine::scale(self.viewport.scale)
            * vello_cpu::kurbo::Affine::translate((
                self.viewport.half_width(),
                self.viewport.half_height(),
            ))
    }
}

impl DrawSurface for CpuSurface {
    fn begin_frame(&mut self, viewport: &Viewport) -> DotsResult<()> {
        viewport.validate()?;
        let (width, height) = device_size_u16(viewport)?;
        if width != self.width || height != self.height {
            tracing::debug!(width, height, "resizing cpu surface");
            self.ctx = vello_cpu::RenderContext::new(width, height);
            self.pixmap = vello_cpu::Pixmap::new(width, height);
            self.width = width;
            self.height = height;
        }
        self.viewport = *viewport;
        self.ctx.reset();
        Ok(())
    }

    fn fill_background(&mut self, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn fill_dots(&mut self, dots: &[Dot], color: Rgb8) {
        if dots.is_empty() {
            return;
        }

        let mut path = vello_cpu::kurbo::BezPath::new();
        for p in dots {
            path.move_to((p.x, p.y));
            path.line_to((p.x + 1.0, p.y));
            path.line_to((p.x + 1.0, p.y + 1.0));
            path.line_to((p.x, p.y + 1.0));
            path.close_path();
        }

        self.ctx.set_transform(self.center_transform());
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&path);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn end_frame(&mut self) -> DotsResult<FrameRGBA> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn paint(color: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn device_size_u16(viewport: &Viewport) -> DotsResult<(u16, u16)> {
    let (w, h) = viewport.device_size();
    let w: u16 = w
        .try_into()
        .map_err(|_| DotsError::config(format!("surface width exceeds u16: {w}")))?;
    let h: u16 = h
        .try_into()
        .map_err(|_| DotsError::config(format!("surface height exceeds u16: {h}")))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
