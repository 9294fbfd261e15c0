use crate::foundation::error::{HeartError, HeartResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Seed group shared by `group` consecutive frames (`frame / group`).
    pub fn seed_group(self, group: u64) -> u64 {
        self.0 / group.max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> HeartResult<Self> {
        if den == 0 {
            return Err(HeartError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HeartError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame duration as a `(numerator, denominator)` millisecond ratio.
    pub fn frame_duration_ms(self) -> HeartResult<(u32, u32)> {
        let numer = self
            .den
            .checked_mul(1000)
            .ok_or_else(|| HeartError::validation("Fps den too large for a millisecond delay"))?;
        Ok((numer, self.num))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> HeartResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeartError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Half extent; shapes are authored in canvas space and recentered around this.
    pub fn center(self) -> Vec2 {
        Vec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
