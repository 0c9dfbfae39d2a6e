//! Polygon recipes used to paint detector kernels.

use super::{Point, Polygon};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Traversal direction of generated vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
        }
    }
}

/// Axis-aligned rectangle centred at `center`, spanning `±half_length` along
/// x and `±half_thickness` along y. Vertices are counter-clockwise.
pub fn bar(center: Point, half_length: f64, half_thickness: f64) -> Polygon {
    vec![
        Point::new(center.x - half_length, center.y - half_thickness),
        Point::new(center.x + half_length, center.y - half_thickness),
        Point::new(center.x + half_length, center.y + half_thickness),
        Point::new(center.x - half_length, center.y + half_thickness),
    ]
}

/// `vertex_count` equally spaced points on a circle; approximates a disk.
pub fn regular_polygon(
    center: Point,
    radius: f64,
    vertex_count: usize,
    winding: Winding,
) -> Polygon {
    if vertex_count == 0 {
        return Vec::new();
    }
    let k = winding.sign() * TAU / vertex_count as f64;
    (0..vertex_count)
        .map(|i| {
            let t = k * i as f64;
            center + radius * Vector2::new(t.cos(), t.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area;
    use approx::assert_relative_eq;

    #[test]
    fn bar_corners_and_area() {
        let b = bar(Point::new(1.0, 2.0), 3.0, 0.5);
        assert_eq!(b.len(), 4);
        assert_eq!(b[0], Point::new(-2.0, 1.5));
        assert_eq!(b[2], Point::new(4.0, 2.5));
        assert_relative_eq!(signed_area(&b), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn regular_polygon_orientation() {
        let c = Point::new(5.0, 5.0);
        let ccw = regular_polygon(c, 2.0, 12, Winding::CounterClockwise);
        let cw = regular_polygon(c, 2.0, 12, Winding::Clockwise);
        // Area of a regular n-gon: n r^2 sin(2π/n) / 2.
        let expected = 12.0 * 4.0 * (TAU / 12.0).sin() / 2.0;
        assert_relative_eq!(signed_area(&ccw), expected, epsilon = 1e-9);
        assert_relative_eq!(signed_area(&cw), -expected, epsilon = 1e-9);
        for p in &ccw {
            assert_relative_eq!((p - c).norm(), 2.0, epsilon = 1e-12);
        }
    }
}
