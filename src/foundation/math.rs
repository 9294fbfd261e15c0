/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last value is exactly `end`; `n == 1` yields only `start` and `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> impl ExactSizeIterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
