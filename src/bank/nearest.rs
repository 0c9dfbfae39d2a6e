//! Nearest-kernel lookup.
//!
//! Only angles in `[-π/4, π/4]` are stored. A query angle outside that band
//! is first transposed onto it (`3π/2 − a`), wrapped to `[-π, π)` and then
//! folded onto the right half plane; the fold negates the offset since the
//! line's normal flips with it.

use super::{CellIndex, DetectorBank};
use crate::angle::{is_angle_leftward, is_small_angle, wrap_angle_2pi, wrap_angle_half_plane};
use crate::error::{Axis, BankError};
use crate::range::DiscretizationRange;
use std::f64::consts::PI;

/// Maps a query `(offset, angle)` onto the stored angle band.
pub fn fold_query(offset: f64, angle: f64, transpose_flips_offset: bool) -> (f64, f64) {
    let (mut offset, mut angle) = (offset, angle);
    if !is_small_angle(angle) {
        angle = 1.5 * PI - angle;
        if transpose_flips_offset {
            offset = -offset;
        }
    }
    angle = wrap_angle_2pi(angle);
    if is_angle_leftward(angle) {
        angle = wrap_angle_half_plane(angle);
        offset = -offset;
    }
    (offset, angle)
}

impl DetectorBank {
    /// Cell closest to the query; fails if any axis rounds outside the bank.
    pub fn nearest_cell(
        &self,
        offset: f64,
        width: f64,
        angle: f64,
    ) -> Result<CellIndex, BankError> {
        let (offset, angle) = fold_query(offset, angle, self.transpose_flips_offset);
        let counts = self.counts;
        Ok(CellIndex {
            offset: axis_index(Axis::Offset, &self.ranges.offset, offset, counts.offset)?,
            width: axis_index(Axis::Width, &self.ranges.width, width, counts.width)?,
            angle: axis_index(Axis::Angle, &self.ranges.angle, angle, counts.angle)?,
        })
    }

    /// Flat element offset of the nearest kernel image.
    pub fn nearest(&self, offset: f64, width: f64, angle: f64) -> Result<usize, BankError> {
        self.nearest_cell(offset, width, angle)
            .map(|cell| self.index_at(cell))
    }
}

fn axis_index(
    axis: Axis,
    range: &DiscretizationRange,
    value: f64,
    extent: usize,
) -> Result<usize, BankError> {
    // NaN would otherwise round to index 0.
    let index = if value.is_nan() {
        i64::MIN
    } else {
        range.nearest_index(value)
    };
    usize::try_from(index)
        .ok()
        .filter(|&i| i < extent)
        .ok_or(BankError::OutOfRange {
            axis,
            index,
            extent,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn small_rightward_angles_pass_through() {
        let (o, a) = fold_query(0.3, 0.2, false);
        assert_abs_diff_eq!(o, 0.3);
        assert_abs_diff_eq!(a, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn opposite_direction_flips_offset() {
        let (o, a) = fold_query(0.3, 0.2 + PI, false);
        assert_abs_diff_eq!(o, -0.3);
        assert_abs_diff_eq!(a, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn steep_angles_land_in_band() {
        for flip in [false, true] {
            for &a in &[1.0, 1.4, -1.2, 2.0, 4.0, -2.5] {
                let (_, folded) = fold_query(0.0, a, flip);
                assert!(
                    folded >= -FRAC_PI_4 - 1e-12 && folded <= FRAC_PI_4 + 1e-12,
                    "{a} folded to {folded}"
                );
            }
        }
    }

    #[test]
    fn transpose_offset_sign_follows_flag() {
        // 1.0 rad transposes to 3π/2 - 1 ≈ 3.71, which is leftward and flips once more.
        let (plain, _) = fold_query(0.3, 1.0, false);
        let (flipped, _) = fold_query(0.3, 1.0, true);
        assert_abs_diff_eq!(plain, -0.3);
        assert_abs_diff_eq!(flipped, 0.3);
    }
}
