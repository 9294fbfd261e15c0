//! Dot styling: size, color and pixel snapping for generated particles.

use std::f64::consts::PI;

use crate::{
    foundation::core::{Canvas, Lerp, Point, Rgb8},
    particles::{decor::DecorParticle, rng::ParticleRng},
    render::Dot,
};

pub const HEART_BRIGHT: Rgb8 = Rgb8::new(255, 5, 22);
pub const HEART_DARK: Rgb8 = Rgb8::new(245, 172, 189);
pub const DECOR_BRIGHT: Rgb8 = Rgb8::new(255, 5, 22);
pub const DECOR_DARK: Rgb8 = Rgb8::new(255, 198, 255);

/// Sub-pixel steps per pixel for centers and radii.
pub const SUBPIXEL: f64 = 16.0;
pub const HEART_MAX_RADIUS: f64 = 1.1;
pub const DECOR_MAX_RADIUS: f64 = 1.0;

/// Canvas-centered position to canvas pixels, truncated to the sub-pixel grid.
pub fn to_canvas(p: Point, canvas: Canvas) -> Point {
    let c = p + canvas.center();
    Point::new(
        (c.x * SUBPIXEL).trunc() / SUBPIXEL,
        (c.y * SUBPIXEL).trunc() / SUBPIXEL,
    )
}

fn snap_radius(max: f64, rng: &mut ParticleRng) -> f64 {
    (rng.uniform() * max * SUBPIXEL).floor() / SUBPIXEL
}

/// Heart dots; colors lean toward the bright end through a cosine bias.
pub fn style_heart(points: &[Point], canvas: Canvas, rng: &mut ParticleRng) -> Vec<Dot> {
    points
        .iter()
        .map(|&p| {
            let radius = snap_radius(HEART_MAX_RADIUS, rng);
            let tone = (1.0 - (rng.uniform() * PI).cos()) / 2.0;
            Dot {
                center: to_canvas(p, canvas),
                radius,
                color: Rgb8::lerp(&HEART_BRIGHT, &HEART_DARK, tone),
            }
        })
        .collect()
}

pub fn style_decor(
    particles: &[DecorParticle],
    canvas: Canvas,
    rng: &mut ParticleRng,
) -> Vec<Dot> {
    particles
        .iter()
        .map(|p| Dot {
            center: to_canvas(p.pos, canvas),
            radius: snap_radius(DECOR_MAX_RADIUS, rng),
            color: Rgb8::lerp(&DECOR_BRIGHT, &DECOR_DARK, p.tone),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
