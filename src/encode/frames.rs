use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::FrameIndex,
        error::{HeartError, HeartResult},
    },
    render::FrameRGB,
};

pub const FRAME_EXTENSION: &str = "jpg";

/// `<dir>/NNNNN.jpg` for a frame index.
pub fn frame_path(dir: &Path, frame: FrameIndex) -> PathBuf {
    dir.join(format!("{:05}.{FRAME_EXTENSION}", frame.0))
}

pub fn ensure_dir(dir: &Path) -> HeartResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

/// Writes numbered still frames into one directory.
#[derive(Clone, Debug)]
pub struct FrameWriter {
    dir: PathBuf,
}

impl FrameWriter {
    /// Creates `dir` (and parents) if missing.
    pub fn new(dir: impl Into<PathBuf>) -> HeartResult<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, frame_idx: FrameIndex, frame: &FrameRGB) -> HeartResult<PathBuf> {
        let expected = frame.width as usize * frame.height as usize * 3;
        if frame.data.len() != expected {
            return Err(HeartError::encode(format!(
                "frame data has {} bytes, expected {expected} for {}x{} rgb8",
                frame.data.len(),
                frame.width,
                frame.height
            )));
        }

        let path = frame_path(&self.dir, frame_idx);
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Jpeg,
        )
        .with_context(|| format!("write frame '{}'", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/frames.rs"]
mod tests;
