//! Particles forming the body of the heart.
//!
//! A sweep variable `rc` runs from 1 (outline) to 0 (core). Outline samples are dense and sit on
//! the frame silhouette; as `rc` falls they thin out geometrically and collapse toward the tiny
//! seed shape, with jitter growing toward the core.

use crate::{
    foundation::{
        core::Point,
        error::{HeartError, HeartResult},
        math::linspace,
    },
    particles::rng::ParticleRng,
    shape::{library::ShapeLibrary, silhouette::Silhouette},
};

pub const RC_STEPS: usize = 180;
pub const FALLOFF_POWER: f64 = 2.8;
pub const JITTER: f64 = 30.0;
pub const JITTER_DAMPING: f64 = 0.90;
/// Below this `rc` the pull toward the small heart fades out.
pub const SETTLE_RC: f64 = 0.05;

/// Number of particles emitted at sweep value `rc`.
pub fn count_at(rc: f64, point_count: usize) -> usize {
    (rc.powf(FALLOFF_POWER) * point_count as f64).floor().max(0.0) as usize
}

/// Heart body positions (canvas-centered) for one frame.
///
/// `current` is the frame's morphed silhouette and `t` its blend weight. Randomness is drawn from
/// `rng` as-is; the caller owns seeding.
pub fn generate(
    library: &ShapeLibrary,
    current: &Silhouette,
    t: f64,
    rng: &mut ParticleRng,
) -> HeartResult<Vec<Point>> {
    let n = library.point_count();
    if current.len() != n {
        return Err(HeartError::validation(format!(
            "frame silhouette has {} points, expected {n}",
            current.len()
        )));
    }

    let (tiny, small) = (library.tiny(), library.small());
    let mut out = Vec::new();
    for rc in linspace(1.0, 0.0, RC_STEPS) {
        let count = count_at(rc, n);
        let settle = t * (rc / SETTLE_RC).min(1.0);
        for idx in rng.indices(n, count) {
            let target = current[idx];
            let jitter = rng.jitter(JITTER * (1.0 - rc * JITTER_DAMPING));
            let loose = tiny[idx].lerp(target, rc) + jitter;
            let held = small[idx].lerp(target, rc);
            out.push(loose.lerp(held, settle));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/particles/heart.rs"]
mod tests;
