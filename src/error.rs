//! Error type shared by the bank construction, overlap and lookup paths.

/// Axis of the discretized parameter space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Offset,
    Width,
    Angle,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Offset => "offset",
            Axis::Width => "width",
            Axis::Angle => "angle",
        };
        f.write_str(name)
    }
}

/// Reasons why building or querying a detector bank may fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BankError {
    /// A discretization range with a non-positive (or non-finite) step, or
    /// one that yields no samples.
    InvalidRange { min: f64, max: f64, step: f64 },
    /// The union bounding box of an overlap test has zero or non-finite
    /// extent along one axis (or a vertex is NaN), so the lattice scale is
    /// undefined.
    DegenerateBounds { width: f64, height: f64 },
    /// A nearest-detector query rounded to an index outside the bank.
    OutOfRange { axis: Axis, index: i64, extent: usize },
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankError::InvalidRange { min, max, step } => {
                write!(f, "invalid range [{min}, {max}] with step {step}")
            }
            BankError::DegenerateBounds { width, height } => write!(
                f,
                "degenerate overlap bounds ({width:.3e} x {height:.3e})"
            ),
            BankError::OutOfRange {
                axis,
                index,
                extent,
            } => write!(f, "{axis} index {index} outside 0..{extent}"),
        }
    }
}

impl std::error::Error for BankError {}
