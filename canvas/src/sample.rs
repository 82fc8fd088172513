//! Fixed-step sampling of curves into drawable paths.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

/// Sample `g` at `steps + 1` evenly spaced points across `domain`.
///
/// Non-finite samples are dropped and split the path. Two adjacent finite
/// samples further apart than `jump_limit` vertically also split it, so a
/// pole does not turn into a vertical line.
#[must_use]
pub fn sample_path(g: impl Fn(f64) -> f64, domain: (f64, f64), steps: usize, jump_limit: f64) -> Vec<Vec<(f64, f64)>> {
    let (a, b) = domain;
    let steps = steps.max(1);
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for i in 0..=steps {
        let x = a + (b - a) * i as f64 / steps as f64;
        let y = g(x);
        if !(x.is_finite() && y.is_finite()) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(&(_, last_y)) = current.last() {
            if (y - last_y).abs() > jump_limit {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push((x, y));
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// `count + 1` evenly spaced positions across `[a, b]`.
pub fn linspace(a: f64, b: f64, count: usize) -> impl Iterator<Item = f64> {
    let count = count.max(1);
    (0..=count).map(move |i| a + (b - a) * i as f64 / count as f64)
}
