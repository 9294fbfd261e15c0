use crate::foundation::{
    core::{Canvas, Point, Rgb8},
    error::HeartResult,
};

pub mod cpu;
pub mod palette;

/// Packed RGB8 frame, row-major, `width * height * 3` bytes.
#[derive(Clone, Debug)]
pub struct FrameRGB {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGB {
    pub fn black(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.width as usize * canvas.height as usize * 3],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Filled disc in canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb8,
}

/// Turns styled dots into pixels. One call per frame; the canvas starts black every time.
pub trait Rasterizer {
    fn canvas(&self) -> Canvas;

    fn render(&mut self, dots: &[Dot]) -> HeartResult<FrameRGB>;
}
