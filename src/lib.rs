#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bank;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;

// Geometry and rasterization internals; public for tools and tests.
pub mod angle;
pub mod geometry;
pub mod grid;
pub mod overlap;
pub mod range;
pub mod raster;

// --- High-level re-exports -------------------------------------------------

pub use crate::bank::{BankParams, CellIndex, DetectorBank, DetectorKind};
pub use crate::diagnostics::BankReport;
pub use crate::error::{Axis, BankError};
pub use crate::grid::Grid;
pub use crate::range::DiscretizationRange;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use detector_bank::prelude::*;
///
/// # fn main() -> Result<(), BankError> {
/// let bank = DetectorBank::new(&BankParams::default())?;
/// let cell = bank.nearest_cell(0.25, 2.0, 0.3)?;
/// let kernel = bank.kernel_at(cell);
/// println!("sum={:.3} build_ms={:.1}", kernel.sum(), bank.build_ms());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::{Point, Polygon};
    pub use crate::image::{ImageView, KernelView};
    pub use crate::{BankError, BankParams, CellIndex, DetectorBank, DetectorKind};
}
