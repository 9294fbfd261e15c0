//! De Casteljau evaluation of Bezier curves of arbitrary degree.

use crate::foundation::core::Point;

/// One de Casteljau step: interpolate every adjacent pair at `t`.
///
/// The result has one point fewer than the input (empty input stays empty).
pub fn reduce_once(points: &[Point], t: f64) -> Vec<Point> {
    points.windows(2).map(|w| w[0].lerp(w[1], t)).collect()
}

/// Point on the Bezier curve defined by `control` at parameter `t`.
///
/// A single control point is returned as-is. An empty sequence evaluates to the origin.
pub fn eval(control: &[Point], t: f64) -> Point {
    let Some(&first) = control.first() else {
        return Point::ORIGIN;
    };
    if control.len() == 1 {
        return first;
    }

    let mut level = reduce_once(control, t);
    while level.len() > 1 {
        // Collapse in place; the tail entry is dropped after each pass.
        for i in 0..level.len() - 1 {
            level[i] = level[i].lerp(level[i + 1], t);
        }
        level.pop();
    }
    level[0]
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
