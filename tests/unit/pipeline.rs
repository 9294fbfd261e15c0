use super::*;
use crate::render::cpu::CpuRasterizer;

fn small_cfg() -> AnimationConfig {
    AnimationConfig {
        canvas: Canvas::new(256, 170).unwrap(),
        frames: 6,
        samples: 20,
        ..AnimationConfig::default()
    }
}

#[test]
fn default_config_is_the_fixed_animation() {
    let cfg = AnimationConfig::default();
    assert_eq!((cfg.canvas.width, cfg.canvas.height), (1024, 680));
    assert_eq!(cfg.frames, 70);
    assert_eq!(cfg.samples, 150);
    assert_eq!(cfg.heart_seed, 3);
    assert_eq!(cfg.out_dir, PathBuf::from("imgs"));
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(
        AnimationConfig {
            frames: 0,
            ..AnimationConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        AnimationConfig {
            samples: 0,
            ..AnimationConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        AnimationConfig {
            gif_stride: 0,
            ..AnimationConfig::default()
        }
        .validate()
        .is_err()
    );
}

#[test]
fn frame_generation_is_reproducible() {
    let anim = HeartAnimation::new(small_cfg()).unwrap();
    let mut rng = ParticleRng::new(0);
    let a = anim.frame_particles(FrameIndex(2), &mut rng).unwrap();
    // Whatever the stream looked like before, the frame reseeds itself.
    rng.uniform();
    let b = anim.frame_particles(FrameIndex(2), &mut rng).unwrap();
    assert_eq!(a.heart, b.heart);
    assert_eq!(a.decor, b.decor);
    assert_eq!(a.dots, b.dots);
    assert_eq!(a.dots.len(), a.heart.len() + a.decor.len());
}

#[test]
fn frame_outside_animation_is_rejected() {
    let anim = HeartAnimation::new(small_cfg()).unwrap();
    let mut rng = ParticleRng::new(0);
    assert!(anim.frame_particles(FrameIndex(6), &mut rng).is_err());
}

#[test]
fn rasterizer_canvas_must_match() {
    let anim = HeartAnimation::new(small_cfg()).unwrap();
    let mut rng = ParticleRng::new(0);
    let mut wrong = CpuRasterizer::new(Canvas::new(64, 64).unwrap()).unwrap();
    assert!(anim.render_frame(FrameIndex(0), &mut rng, &mut wrong).is_err());

    let mut right = CpuRasterizer::new(small_cfg().canvas).unwrap();
    let frame = anim.render_frame(FrameIndex(0), &mut rng, &mut right).unwrap();
    assert!(frame.data.iter().any(|&b| b != 0));
}

#[test]
fn render_sequence_writes_one_numbered_jpeg_per_frame() {
    let dir = PathBuf::from("target")
        .join("unit_render_sequence")
        .join("nested");
    let _ = std::fs::remove_dir_all(PathBuf::from("target").join("unit_render_sequence"));

    let cfg = AnimationConfig {
        out_dir: dir.clone(),
        ..small_cfg()
    };
    let anim = HeartAnimation::new(cfg.clone()).unwrap();
    let mut raster = CpuRasterizer::new(cfg.canvas).unwrap();
    let written = anim.render_sequence(&mut raster).unwrap();

    assert!(dir.is_dir());
    let expected: Vec<PathBuf> = (0..cfg.frames as u64)
        .map(|i| crate::encode::frames::frame_path(&dir, FrameIndex(i)))
        .collect();
    assert_eq!(written, expected);
    for path in &written {
        let img = image::open(path).unwrap();
        assert_eq!(
            (img.width(), img.height()),
            (cfg.canvas.width, cfg.canvas.height)
        );
    }
}
