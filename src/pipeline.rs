use std::path::PathBuf;

use crate::{
    animation::ease::{DEFAULT_FRAMES, EasingTable},
    encode::{
        frames::FrameWriter,
        gif::{DEFAULT_GIF_FPS, DEFAULT_STRIDE, GifConfig, assemble_gif},
    },
    foundation::{
        core::{Canvas, FrameIndex, Point},
        error::{HeartError, HeartResult},
    },
    particles::{
        decor::{self, DecorParticle},
        heart,
        rng::ParticleRng,
    },
    render::{Dot, FrameRGB, Rasterizer, palette},
    shape::{library::ShapeLibrary, silhouette::DEFAULT_SAMPLES},
};

pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 680;
/// Stream reset before every frame's heart particles.
pub const HEART_SEED: u64 = 3;

/// Fixed parameters of the animation and where its output goes.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    pub canvas: Canvas,
    pub frames: usize,
    pub samples: usize,
    pub heart_seed: u64,
    pub out_dir: PathBuf,
    pub gif_path: PathBuf,
    pub gif_stride: usize,
    pub gif_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: WIDTH,
                height: HEIGHT,
            },
            frames: DEFAULT_FRAMES,
            samples: DEFAULT_SAMPLES,
            heart_seed: HEART_SEED,
            out_dir: PathBuf::from("imgs"),
            gif_path: PathBuf::from("heart.gif"),
            gif_stride: DEFAULT_STRIDE,
            gif_fps: DEFAULT_GIF_FPS,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> HeartResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.frames == 0 {
            return Err(HeartError::validation("frame count must be non-zero"));
        }
        if self.samples == 0 {
            return Err(HeartError::validation("sample count must be non-zero"));
        }
        self.gif_config().validate()
    }

    pub fn gif_config(&self) -> GifConfig {
        GifConfig {
            frames_dir: self.out_dir.clone(),
            frame_count: self.frames,
            stride: self.gif_stride,
            fps: self.gif_fps,
            out_path: self.gif_path.clone(),
        }
    }
}

/// Everything generated for one frame before rasterization.
#[derive(Clone, Debug)]
pub struct FrameParticles {
    pub frame: FrameIndex,
    pub weight: f64,
    /// Canvas-centered heart body positions.
    pub heart: Vec<Point>,
    pub decor: Vec<DecorParticle>,
    /// Styled dots in draw order: heart first, then decoration.
    pub dots: Vec<Dot>,
}

/// Shape library and easing table, built once and reused for every frame.
#[derive(Clone, Debug)]
pub struct HeartAnimation {
    cfg: AnimationConfig,
    library: ShapeLibrary,
    easing: EasingTable,
}

impl HeartAnimation {
    pub fn new(cfg: AnimationConfig) -> HeartResult<Self> {
        cfg.validate()?;
        let library = ShapeLibrary::new(cfg.canvas, cfg.samples);
        let easing = EasingTable::new(cfg.frames);
        Ok(Self {
            cfg,
            library,
            easing,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.cfg
    }

    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    pub fn easing(&self) -> &EasingTable {
        &self.easing
    }

    pub fn frame_count(&self) -> usize {
        self.easing.len()
    }

    /// Generates and styles one frame.
    ///
    /// Seeding is two-tier: the stream is reset to the heart seed before the heart particles,
    /// and the decoration generator reseeds itself from the frame's seed group.
    #[tracing::instrument(skip(self, rng))]
    pub fn frame_particles(
        &self,
        frame: FrameIndex,
        rng: &mut ParticleRng,
    ) -> HeartResult<FrameParticles> {
        let weight = usize::try_from(frame.0)
            .ok()
            .and_then(|i| self.easing.weight(i))
            .ok_or_else(|| {
                HeartError::validation(format!(
                    "frame {} is outside the {}-frame animation",
                    frame.0,
                    self.frame_count()
                ))
            })?;
        let canvas = self.cfg.canvas;

        rng.reseed(self.cfg.heart_seed);
        let current = self.library.morph(weight)?;
        let heart = heart::generate(&self.library, &current, weight, rng)?;
        let mut dots = palette::style_heart(&heart, canvas, rng);

        let decor = decor::generate(&self.library, frame, weight, rng);
        dots.extend(palette::style_decor(&decor, canvas, rng));

        tracing::debug!(
            heart = heart.len(),
            decor = decor.len(),
            weight,
            "generated particles"
        );
        Ok(FrameParticles {
            frame,
            weight,
            heart,
            decor,
            dots,
        })
    }

    pub fn render_frame(
        &self,
        frame: FrameIndex,
        rng: &mut ParticleRng,
        rasterizer: &mut dyn Rasterizer,
    ) -> HeartResult<FrameRGB> {
        if rasterizer.canvas() != self.cfg.canvas {
            return Err(HeartError::validation(
                "rasterizer canvas does not match the animation canvas",
            ));
        }
        let particles = self.frame_particles(frame, rng)?;
        rasterizer.render(&particles.dots)
    }

    /// Renders every frame in order and writes it to the output directory.
    ///
    /// Returns the paths written. The first I/O failure aborts the run.
    pub fn render_sequence(&self, rasterizer: &mut dyn Rasterizer) -> HeartResult<Vec<PathBuf>> {
        let writer = FrameWriter::new(&self.cfg.out_dir)?;
        let mut rng = ParticleRng::new(self.cfg.heart_seed);
        let total = self.frame_count();
        let mut written = Vec::with_capacity(total);

        for idx in 0..total {
            let frame = FrameIndex(idx as u64);
            let rgb = self.render_frame(frame, &mut rng, rasterizer)?;
            written.push(writer.write(frame, &rgb)?);

            let done = idx + 1;
            let percent = done as f64 / total as f64 * 100.0;
            tracing::info!("saved {percent:.1}% ({done}/{total} frames)");
        }

        tracing::info!(dir = %writer.dir().display(), "all frames saved");
        Ok(written)
    }

    /// Reassembles the saved stills into the looping GIF.
    pub fn export_gif(&self) -> HeartResult<usize> {
        assemble_gif(&self.cfg.gif_config())
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
