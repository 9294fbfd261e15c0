use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        core::Canvas,
        error::{HeartError, HeartResult},
    },
    render::{Dot, FrameRGB, Rasterizer},
};

/// Radius used for dots that snapped to zero, so they still leave a one-pixel mark.
pub const MIN_DOT_RADIUS: f64 = 0.5;
const PATH_TOLERANCE: f64 = 0.05;

pub struct CpuRasterizer {
    canvas: Canvas,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRasterizer {
    pub fn new(canvas: Canvas) -> HeartResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| HeartError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| HeartError::render("canvas height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }
}

impl Rasterizer for CpuRasterizer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn render(&mut self, dots: &[Dot]) -> HeartResult<FrameRGB> {
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 255]);

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        for dot in dots {
            if !dot.center.x.is_finite() || !dot.center.y.is_finite() {
                continue;
            }
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                dot.color.r,
                dot.color.g,
                dot.color.b,
                255,
            ));
            let circle = vello_cpu::kurbo::Circle::new(
                vello_cpu::kurbo::Point::new(dot.center.x, dot.center.y),
                dot.radius.max(MIN_DOT_RADIUS),
            );
            ctx.fill_path(&circle.to_path(PATH_TOLERANCE));
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGB {
            width: self.canvas.width,
            height: self.canvas.height,
            data: premul_rgba8_to_rgb8(self.pixmap.data_as_u8_slice()),
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

/// Frames are composited over opaque black, so dropping alpha is exact.
fn premul_rgba8_to_rgb8(rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        out.extend_from_slice(&px[..3]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
