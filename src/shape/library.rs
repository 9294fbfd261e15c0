use crate::{
    foundation::{core::Canvas, error::HeartResult},
    shape::silhouette::{ControlPolygon, Silhouette},
};

pub const TINY_SCALE: f64 = 0.01;
pub const SMALL_SCALE: f64 = 0.35;
pub const BASE_SCALE: f64 = 1.0;
pub const FINAL_SCALE: f64 = 0.9;

/// The four fixed silhouettes every frame is derived from.
///
/// All four share point count and emission order, so index `i` names the same relative curve
/// position in each of them.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    tiny: Silhouette,
    small: Silhouette,
    base: Silhouette,
    final_heart: Silhouette,
}

impl ShapeLibrary {
    pub fn new(canvas: Canvas, samples: usize) -> Self {
        let base = ControlPolygon::base(canvas);
        let final_heart = ControlPolygon::final_heart(canvas);
        Self {
            tiny: Silhouette::build(&base.scaled(TINY_SCALE), samples),
            small: Silhouette::build(&base.scaled(SMALL_SCALE), samples),
            base: Silhouette::build(&base.scaled(BASE_SCALE), samples),
            final_heart: Silhouette::build(&final_heart.scaled(FINAL_SCALE), samples),
        }
    }

    pub fn tiny(&self) -> &Silhouette {
        &self.tiny
    }

    pub fn small(&self) -> &Silhouette {
        &self.small
    }

    pub fn base(&self) -> &Silhouette {
        &self.base
    }

    pub fn final_heart(&self) -> &Silhouette {
        &self.final_heart
    }

    pub fn point_count(&self) -> usize {
        self.tiny.len()
    }

    /// Frame silhouette between `base` (t = 0) and `final` (t = 1).
    pub fn morph(&self, t: f64) -> HeartResult<Silhouette> {
        self.base.blend(&self.final_heart, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/library.rs"]
mod tests;
