use crate::{
    curve::bezier,
    foundation::{core::Point, math::linspace},
};

/// Default animation length in frames.
pub const DEFAULT_FRAMES: usize = 70;

/// Control polygon of the easing curve; only its `y` coordinate is used.
pub const EASE_CONTROL: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 0.82), (0.14, 0.99), (1.0, 1.0)];

/// Per-frame blend weights: slow start, fast approach, gentle settle at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct EasingTable {
    weights: Vec<f64>,
}

impl EasingTable {
    pub fn new(frames: usize) -> Self {
        let control = EASE_CONTROL.map(|(x, y)| Point::new(x, y));
        let mut weights: Vec<f64> = linspace(0.0, 1.0, frames)
            .map(|t| 1.0 - bezier::eval(&control, t).y)
            .collect();
        weights.reverse();
        Self { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, frame: usize) -> Option<f64> {
        self.weights.get(frame).copied()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.weights.iter().copied()
    }
}

impl Default for EasingTable {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
