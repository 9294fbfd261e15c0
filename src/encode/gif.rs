//! Second-stage export: reassembles saved stills into a looping GIF.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    encode::frames::{ensure_dir, frame_path},
    foundation::{
        core::{FrameIndex, Fps},
        error::{HeartError, HeartResult},
    },
};

pub const DEFAULT_STRIDE: usize = 4;
pub const DEFAULT_GIF_FPS: u32 = 60;
/// NeuQuant sampling speed (1 = slowest/best, 30 = fastest).
pub const QUANTIZER_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct GifConfig {
    /// Directory holding `NNNNN.jpg` stills.
    pub frames_dir: PathBuf,
    /// Number of stills available, starting at index 0.
    pub frame_count: usize,
    /// Keep every `stride`-th still.
    pub stride: usize,
    pub fps: u32,
    pub out_path: PathBuf,
}

impl GifConfig {
    pub fn validate(&self) -> HeartResult<()> {
        if self.stride == 0 {
            return Err(HeartError::validation("gif stride must be non-zero"));
        }
        if self.frame_count == 0 {
            return Err(HeartError::validation("gif needs at least one source frame"));
        }
        Fps::new(self.fps, 1)?;
        Ok(())
    }
}

/// Indices `0, stride, 2*stride, ...` below `frame_count`.
pub fn strided_indices(frame_count: usize, stride: usize) -> Vec<FrameIndex> {
    (0..frame_count)
        .step_by(stride.max(1))
        .map(|i| FrameIndex(i as u64))
        .collect()
}

/// Forward pass followed by the same items reversed.
pub fn ping_pong<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * 2);
    out.extend_from_slice(items);
    out.extend(items.iter().rev().cloned());
    out
}

fn read_still(path: &Path) -> HeartResult<RgbaImage> {
    if !path.is_file() {
        return Err(HeartError::encode(format!(
            "missing frame '{}'",
            path.display()
        )));
    }
    let img = image::open(path).with_context(|| format!("read frame '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// Reads the strided stills, writes them forward then backward as an endlessly looping GIF.
///
/// Returns the number of GIF frames written.
#[tracing::instrument(skip(cfg), fields(out = %cfg.out_path.display()))]
pub fn assemble_gif(cfg: &GifConfig) -> HeartResult<usize> {
    cfg.validate()?;

    let stills = strided_indices(cfg.frame_count, cfg.stride)
        .into_iter()
        .map(|idx| read_still(&frame_path(&cfg.frames_dir, idx)))
        .collect::<HeartResult<Vec<_>>>()?;
    tracing::debug!(stills = stills.len(), "loaded stills");

    let (numer, denom) = Fps::new(cfg.fps, 1)?.frame_duration_ms()?;
    let delay = Delay::from_numer_denom_ms(numer, denom);
    let sequence = ping_pong(&stills);
    let written = sequence.len();

    if let Some(parent) = cfg.out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }
    let file = File::create(&cfg.out_path)
        .with_context(|| format!("create gif '{}'", cfg.out_path.display()))?;
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), QUANTIZER_SPEED);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| HeartError::encode(format!("gif repeat: {e}")))?;
    encoder
        .encode_frames(
            sequence
                .into_iter()
                .map(|img| Frame::from_parts(img, 0, 0, delay)),
        )
        .map_err(|e| HeartError::encode(format!("gif encode: {e}")))?;

    tracing::info!(frames = written, "wrote {}", cfg.out_path.display());
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
