use detector_bank::geometry::{Point, Polygon};
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::TAU;

/// Convex polygon with `n` vertices on a circle, at sorted random angles
/// (counter-clockwise in a y-up reading).
pub fn random_convex_polygon(rng: &mut StdRng, center: Point, radius: f64, n: usize) -> Polygon {
    let mut angles: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..TAU)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|t| Point::new(center.x + radius * t.cos(), center.y + radius * t.sin()))
        .collect()
}

/// Sum of `f(x, y)` over a `size × size` pixel grid.
pub fn sum_over_pixels(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> f64 {
    let mut total = 0.0;
    for y in 0..size {
        for x in 0..size {
            total += f(x, y);
        }
    }
    total
}
