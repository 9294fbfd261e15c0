use super::*;
use crate::{foundation::core::Canvas, shape::silhouette::DEFAULT_SAMPLES};

fn library() -> ShapeLibrary {
    ShapeLibrary::new(Canvas::new(1024, 680).unwrap(), DEFAULT_SAMPLES)
}

#[test]
fn tones_in_unit_interval_and_positions_finite() {
    let lib = library();
    let mut rng = ParticleRng::new(0);
    for (frame, t) in [(0u64, 0.0), (12, 0.2), (37, 0.6), (69, 1.0)] {
        let ps = generate(&lib, FrameIndex(frame), t, &mut rng);
        assert!(!ps.is_empty());
        for p in &ps {
            assert!((0.0..=1.0).contains(&p.tone));
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        }
    }
}

#[test]
fn frames_in_one_seed_group_share_the_stream() {
    let lib = library();
    let mut rng = ParticleRng::new(99);
    let a = generate(&lib, FrameIndex(10), 0.5, &mut rng);
    // Leftover state from an earlier draw must not leak into the next frame.
    rng.uniform();
    let b = generate(&lib, FrameIndex(14), 0.5, &mut rng);
    assert_eq!(a, b);

    let c = generate(&lib, FrameIndex(15), 0.5, &mut rng);
    assert_ne!(a, c);
}

#[test]
fn count_never_exceeds_sweep_times_point_count() {
    let lib = library();
    let mut rng = ParticleRng::new(0);
    let ps = generate(&lib, FrameIndex(3), 0.1, &mut rng);
    assert!(ps.len() <= RC_STEPS * lib.point_count());
}
