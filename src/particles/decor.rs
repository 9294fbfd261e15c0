//! Scattered ambient particles around the heart.
//!
//! Each frame reseeds from `frame / DECOR_SEED_GROUP`, so runs of consecutive frames share one
//! layout and the field flickers in steps rather than every frame.

use crate::{
    foundation::{
        core::{FrameIndex, Point},
        math::linspace,
    },
    particles::rng::ParticleRng,
    shape::library::ShapeLibrary,
};

pub const RC_STEPS: usize = 150;
pub const DECOR_SEED_GROUP: u64 = 5;
/// Reach of the field relative to the final silhouette.
pub const SPREAD: f64 = 1.35;
pub const JITTER: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorParticle {
    /// Canvas-centered position.
    pub pos: Point,
    /// Uniform in `[0, 1)`; picks the particle's color.
    pub tone: f64,
}

pub fn generate(
    library: &ShapeLibrary,
    frame: FrameIndex,
    t: f64,
    rng: &mut ParticleRng,
) -> Vec<DecorParticle> {
    rng.reseed(frame.seed_group(DECOR_SEED_GROUP));

    let n = library.point_count();
    let (tiny, final_heart) = (library.tiny(), library.final_heart());
    let inv = 1.0 - t;
    let mut out = Vec::new();
    for rc in linspace(1.0, 0.0, RC_STEPS) {
        let count = (rng.uniform() * rc * n as f64).floor().max(0.0) as usize;
        for idx in rng.indices(n, count) {
            let outer = (final_heart[idx].to_vec2() * SPREAD).to_point();
            let spread = rng.gaussian() * 0.8 * inv * 0.1 + 0.9;
            let mut pos = tiny[idx].lerp(outer, spread * rc * (0.9 + inv * 0.15));
            pos += rng.jitter(JITTER);
            out.push(DecorParticle {
                pos,
                tone: rng.uniform(),
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/particles/decor.rs"]
mod tests;
