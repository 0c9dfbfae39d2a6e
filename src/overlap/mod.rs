//! Exact intersection area of two simple polygons.
//!
//! Both polygons are fitted onto a common integer lattice (see
//! [`lattice`]), crossings between their edges are resolved with exact
//! orientation tests, and the area of the intersection is accumulated as a
//! line integral (see [`accumulate`]). The result is divided by the lattice
//! scale to return to pixel units.
//!
//! The area is signed: it is positive when both polygons are
//! counter-clockwise in a y-up reading, which is the orientation produced by
//! [`crate::geometry::bar`], [`crate::geometry::regular_polygon`] with
//! [`crate::geometry::Winding::CounterClockwise`] and
//! [`crate::raster::pixel_quad`].

pub mod accumulate;
pub mod lattice;

pub use self::lattice::{fit, LatticePoint, LatticeRing, LatticeTag, LatticeVertex, Span, GAMUT};

use self::accumulate::{accumulate_crossings, inness};
use self::lattice::LatticeScale;
use crate::error::BankError;
use crate::geometry::{AxisAlignedBox, Point};

/// Minimum vertex count for a polygon to enclose area.
pub const MIN_VERTICES: usize = 3;

/// Intersection area of `subject` and `pixel`.
///
/// Returns `Ok(0.0)` when either polygon has fewer than three vertices. Fails
/// with [`BankError::DegenerateBounds`] when the union of both bounding boxes
/// has zero extent along an axis, or when any vertex is not finite.
pub fn overlap_area(subject: &[Point], pixel: &[Point]) -> Result<f64, BankError> {
    if subject.len() < MIN_VERTICES || pixel.len() < MIN_VERTICES {
        return Ok(0.0);
    }
    let bounds = AxisAlignedBox::from_points(subject).union(&AxisAlignedBox::from_points(pixel));
    // min/max skip NaN, so the box alone cannot flag it.
    if subject.iter().chain(pixel).any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(BankError::DegenerateBounds {
            width: f64::NAN,
            height: f64::NAN,
        });
    }
    let scale = LatticeScale::new(&bounds)?;

    let mut a = scale.fit(subject, LatticeTag::Subject);
    let mut b = scale.fit(pixel, LatticeTag::Pixel);

    let mut acc = 0i64;
    accumulate_crossings(&mut acc, &mut a, &mut b);
    inness(&mut acc, &a, &b);
    inness(&mut acc, &b, &a);

    Ok(acc as f64 / scale.area_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{bar, rotate, signed_area, translate};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    fn quad(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn identical_unit_squares_fully_overlap() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let a = overlap_area(&px, &px).unwrap();
        assert_abs_diff_eq!(a, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn left_half_covers_half_a_pixel() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let left = quad(0.0, 0.0, 0.5, 1.0);
        assert_abs_diff_eq!(overlap_area(&left, &px).unwrap(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn disjoint_polygons_do_not_overlap() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let far = quad(3.0, 3.0, 4.0, 5.0);
        assert_abs_diff_eq!(overlap_area(&far, &px).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pixel_inside_large_polygon_is_fully_covered() {
        let px = quad(4.0, 4.0, 5.0, 5.0);
        let big = quad(0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(overlap_area(&big, &px).unwrap(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(overlap_area(&px, &big).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn small_polygon_inside_pixel_keeps_its_area() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let tri = vec![
            Point::new(0.2, 0.2),
            Point::new(0.7, 0.3),
            Point::new(0.4, 0.8),
        ];
        let expected = signed_area(&tri);
        assert_abs_diff_eq!(overlap_area(&tri, &px).unwrap(), expected, epsilon = 1e-6);
    }

    #[test]
    fn corner_overlap_of_rotated_square() {
        // Square of side 1 rotated by 45° centred on the pixel corner (1, 1):
        // a quarter of its area lies inside pixel [0,1]^2.
        let mut d = bar(Point::origin(), 0.5, 0.5);
        rotate(&mut d, std::f64::consts::FRAC_PI_4);
        translate(&mut d, Vector2::new(1.0, 1.0));
        let px = quad(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(overlap_area(&d, &px).unwrap(), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn clockwise_subject_gives_negative_area() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let mut left = quad(0.0, 0.0, 0.5, 1.0);
        left.reverse();
        assert_abs_diff_eq!(overlap_area(&left, &px).unwrap(), -0.5, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        let px = quad(0.0, 0.0, 1.0, 1.0);
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(overlap_area(&two, &px).unwrap(), 0.0);
        assert_eq!(overlap_area(&[], &px).unwrap(), 0.0);

        let flat = vec![
            Point::new(0.2, 0.5),
            Point::new(0.5, 0.5),
            Point::new(0.8, 0.5),
        ];
        assert_abs_diff_eq!(overlap_area(&flat, &px).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn all_collinear_inputs_report_degenerate_bounds() {
        let a = vec![
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
        ];
        let b = vec![
            Point::new(0.5, 1.0),
            Point::new(1.5, 1.0),
            Point::new(2.5, 1.0),
        ];
        assert!(matches!(
            overlap_area(&a, &b),
            Err(BankError::DegenerateBounds { .. })
        ));
    }
}
