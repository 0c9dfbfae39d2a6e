//! Parameter types configuring a detector bank.
//!
//! Defaults sample offsets in `[-1, 1]` px at 0.1 px,
//! angles in `[-π/4, π/4]` at `π/4 / 18`, widths in `[0.4, 6.5]` px at
//! 0.2 px, and an 8 px half-length (19 × 19 px support).

use super::{BankCounts, CellIndex, CellParams, DetectorKind};
use crate::error::BankError;
use crate::range::DiscretizationRange;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Offsets are always sampled across one pixel either side of the anchor.
pub const OFFSET_LIMIT: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankParams {
    /// Which detector family to build.
    pub kind: DetectorKind,
    /// Offset sampling step (pixels).
    pub offset_step: f64,
    /// Angle samples per quarter turn; the angle step is `π/4 / angle_steps`.
    pub angle_steps: f64,
    pub width_min: f64,
    pub width_max: f64,
    pub width_step: f64,
    /// Primitive half-length (pixels); the support is `2 * half_length + 3`.
    pub half_length: usize,
    /// Negate the offset when a steep query angle is transposed onto the
    /// stored band. Off by default; the half-plane flip is always applied.
    pub transpose_flips_offset: bool,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            kind: DetectorKind::Line,
            offset_step: 0.1,
            angle_steps: 18.0,
            width_min: 0.4,
            width_max: 6.5,
            width_step: 0.2,
            half_length: 8,
            transpose_flips_offset: false,
        }
    }
}

impl BankParams {
    pub fn with_kind(kind: DetectorKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Side of the square kernel image.
    pub fn support(&self) -> usize {
        2 * self.half_length + 3
    }

    pub fn ranges(&self) -> BankRanges {
        BankRanges {
            offset: DiscretizationRange::new(-OFFSET_LIMIT, OFFSET_LIMIT, self.offset_step),
            width: DiscretizationRange::new(self.width_min, self.width_max, self.width_step),
            angle: DiscretizationRange::new(-FRAC_PI_4, FRAC_PI_4, FRAC_PI_4 / self.angle_steps),
        }
    }
}

/// The three sampled axes of a bank.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BankRanges {
    pub offset: DiscretizationRange,
    pub width: DiscretizationRange,
    pub angle: DiscretizationRange,
}

impl BankRanges {
    /// Sample counts per axis; fails on an invalid step or an empty axis.
    pub fn counts(&self) -> Result<BankCounts, BankError> {
        Ok(BankCounts {
            offset: axis_count(&self.offset)?,
            width: axis_count(&self.width)?,
            angle: axis_count(&self.angle)?,
        })
    }

    /// Real offset, width and angle of a discretized cell.
    pub fn cell_params(&self, cell: CellIndex) -> CellParams {
        CellParams {
            offset: self.offset.value_at(cell.offset),
            width: self.width.value_at(cell.width),
            angle: self.angle.value_at(cell.angle),
        }
    }
}

fn axis_count(range: &DiscretizationRange) -> Result<usize, BankError> {
    let n = range.step_count()?;
    usize::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| range.invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts() {
        let p = BankParams::default();
        let c = p.ranges().counts().unwrap();
        assert_eq!(c.offset, 21);
        assert_eq!(c.angle, 37);
        assert!(c.width >= 31);
        assert_eq!(p.support(), 19);
    }

    #[test]
    fn zero_angle_steps_is_invalid() {
        let p = BankParams {
            angle_steps: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            p.ranges().counts(),
            Err(BankError::InvalidRange { .. })
        ));
    }

    #[test]
    fn inverted_width_range_is_invalid() {
        let p = BankParams {
            width_min: 3.0,
            width_max: 1.0,
            ..Default::default()
        };
        assert!(p.ranges().counts().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let p: BankParams =
            serde_json::from_str(r#"{ "kind": "half_space", "half_length": 4 }"#).unwrap();
        assert_eq!(p.kind, DetectorKind::HalfSpace);
        assert_eq!(p.half_length, 4);
        assert_eq!(p.offset_step, 0.1);
        assert!(!p.transpose_flips_offset);
    }
}
