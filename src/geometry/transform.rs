//! In-place affine placement of primitives.

use super::Point;
use nalgebra::{Isometry2, Rotation2, Vector2};

/// Rotates every vertex about the origin; positive angles turn
/// counter-clockwise.
pub fn rotate(polygon: &mut [Point], angle: f64) {
    let rot = Rotation2::new(angle);
    for p in polygon.iter_mut() {
        *p = rot * *p;
    }
}

/// Adds `offset` to every vertex.
pub fn translate(polygon: &mut [Point], offset: Vector2<f64>) {
    for p in polygon.iter_mut() {
        *p += offset;
    }
}

/// Rotate by `angle`, then translate so the origin lands on `anchor`.
pub fn place(polygon: &mut [Point], angle: f64, anchor: Point) {
    let iso = Isometry2::new(anchor.coords, angle);
    for p in polygon.iter_mut() {
        *p = iso * *p;
    }
}
