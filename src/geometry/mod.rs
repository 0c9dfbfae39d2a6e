//! Planar geometry for detector primitives.
//!
//! Points are `nalgebra::Point2<f64>` in pixel units with `x` along image
//! columns and `y` along image rows. Polygons are vertex lists that close
//! implicitly; counter-clockwise order (in a y-up reading) yields positive
//! overlap areas.

pub mod bounds;
pub mod primitives;
pub mod transform;

pub use self::bounds::AxisAlignedBox;
pub use self::primitives::{bar, regular_polygon, Winding};
pub use self::transform::{place, rotate, translate};

/// Planar point in pixel coordinates.
pub type Point = nalgebra::Point2<f64>;

/// Ordered, implicitly closed vertex list.
pub type Polygon = Vec<Point>;

/// Twice the signed area of a polygon (shoelace formula).
pub fn signed_area2(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let p = polygon[i];
            let q = polygon[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}

/// Signed polygon area; positive for counter-clockwise vertex order.
#[inline]
pub fn signed_area(polygon: &[Point]) -> f64 {
    0.5 * signed_area2(polygon)
}
