use crate::{
    curve::bezier,
    foundation::{
        core::{Canvas, Point},
        error::{HeartError, HeartResult},
        math::linspace,
    },
};

/// Default number of curve samples per silhouette (each sample yields two points).
pub const DEFAULT_SAMPLES: usize = 150;

/// Six-point control polygon describing half of a heart outline.
///
/// Points are stored centered on the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPolygon {
    points: [Point; 6],
}

impl ControlPolygon {
    /// Build from canvas-space points, recentering by the canvas half extent.
    pub fn from_canvas(canvas: Canvas, points: [(f64, f64); 6]) -> Self {
        let center = canvas.center();
        Self {
            points: points.map(|(x, y)| Point::new(x, y) - center),
        }
    }

    /// Opening shape of the animation.
    pub fn base(canvas: Canvas) -> Self {
        Self::from_canvas(
            canvas,
            [
                (512.0, 204.0),
                (421.0, 9.0),
                (99.0, 209.0),
                (376.0, 358.0),
                (420.0, 493.0),
                (512.0, 544.0),
            ],
        )
    }

    /// Shape the animation settles into.
    pub fn final_heart(canvas: Canvas) -> Self {
        Self::from_canvas(
            canvas,
            [
                (512.0, 146.0),
                (420.0, -18.0),
                (82.0, 202.0),
                (292.0, 363.0),
                (362.0, 524.0),
                (512.0, 566.0),
            ],
        )
    }

    /// Uniform scale about the (centered) origin.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.map(|p| (p.to_vec2() * factor).to_point()),
        }
    }

    pub fn points(&self) -> &[Point; 6] {
        &self.points
    }
}

/// Closed, left/right symmetric outline.
///
/// Points come in pairs: for sample `i`, index `2i` is the curve point and `2i + 1` its mirror
/// across the vertical axis through the first control point.
#[derive(Clone, Debug, PartialEq)]
pub struct Silhouette {
    points: Vec<Point>,
}

impl Silhouette {
    pub fn build(polygon: &ControlPolygon, samples: usize) -> Self {
        let control = polygon.points();
        let x0 = control[0].x;
        let mut points = Vec::with_capacity(samples * 2);
        for t in linspace(0.0, 1.0, samples) {
            let p = bezier::eval(control, t);
            points.push(p);
            points.push(Point::new(2.0 * x0 - p.x, p.y));
        }
        Self { points }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Per-index linear blend; both silhouettes must share their point count.
    pub fn blend(&self, other: &Self, t: f64) -> HeartResult<Self> {
        if self.len() != other.len() {
            return Err(HeartError::validation(format!(
                "cannot blend silhouettes of different length ({} vs {})",
                self.len(),
                other.len()
            )));
        }
        Ok(Self {
            points: self
                .points
                .iter()
                .zip(&other.points)
                .map(|(a, b)| a.lerp(*b, t))
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl std::ops::Index<usize> for Silhouette {
    type Output = Point;

    fn index(&self, idx: usize) -> &Point {
        &self.points[idx]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/silhouette.rs"]
mod tests;
