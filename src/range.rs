//! Discretized parameter axes (offset, width, angle).

use crate::error::BankError;
use serde::{Deserialize, Serialize};

/// One sampled axis `{min, max, step}` of the detector bank.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscretizationRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DiscretizationRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of samples, `round((max - min) / step) + 1`.
    ///
    /// Rounds half away from zero. Only the step is validated; bounds are the
    /// caller's responsibility.
    pub fn step_count(&self) -> Result<i64, BankError> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(self.invalid());
        }
        Ok(((self.max - self.min) / self.step).round() as i64 + 1)
    }

    /// Real parameter value of sample `index`.
    #[inline]
    pub fn value_at(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step
    }

    /// Signed index of the sample closest to `value`; may fall outside the range.
    #[inline]
    pub fn nearest_index(&self, value: f64) -> i64 {
        ((value - self.min) / self.step).round() as i64
    }

    pub(crate) fn invalid(&self) -> BankError {
        BankError::InvalidRange {
            min: self.min,
            max: self.max,
            step: self.step,
        }
    }
}
