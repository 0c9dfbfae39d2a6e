//! Precomputed detector bank.
//!
//! A bank holds one small kernel image for every combination of discretized
//! offset, width and angle. Kernels are painted once at construction by
//! rasterizing a kind-specific set of primitives with exact pixel overlap;
//! afterwards the bank is immutable and can be shared across threads.
//!
//! Typical use:
//!
//! ```no_run
//! use detector_bank::bank::{BankParams, DetectorBank, DetectorKind};
//!
//! let bank = DetectorBank::new(&BankParams::with_kind(DetectorKind::Line))?;
//! let idx = bank.nearest(0.3, 2.0, 0.1)?;
//! let kernel = &bank.data()[idx..idx + bank.grid().image_len()];
//! # let _ = kernel;
//! # Ok::<(), detector_bank::BankError>(())
//! ```

mod nearest;
mod params;
mod render;

pub use self::nearest::fold_query;
pub use self::params::{BankParams, BankRanges, OFFSET_LIMIT};
pub use self::render::{half_space_recipe, line_recipe, render_kernel, Blend, Recipe, Stroke};

use crate::error::BankError;
use crate::geometry::Point;
use crate::grid::{Grid, NDIM};
use crate::image::{KernelView, KernelViewMut};
use crate::range::DiscretizationRange;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Detector family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Bright band of a given width between two dark flanks.
    #[default]
    Line,
    /// Step edge, masked to a disk around the anchor.
    HalfSpace,
}

impl DetectorKind {
    pub fn recipe(self) -> Recipe {
        match self {
            DetectorKind::Line => line_recipe,
            DetectorKind::HalfSpace => half_space_recipe,
        }
    }
}

/// Discretized position of one kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CellIndex {
    pub offset: usize,
    pub width: usize,
    pub angle: usize,
}

impl CellIndex {
    /// Inverse of the kernel enumeration order (offset fastest, angle
    /// slowest), i.e. the `k`-th kernel image in the buffer.
    pub fn from_linear(k: usize, counts: BankCounts) -> Self {
        let offset = k % counts.offset;
        let width = (k / counts.offset) % counts.width;
        let angle = k / (counts.offset * counts.width);
        Self {
            offset,
            width,
            angle,
        }
    }
}

/// Samples per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BankCounts {
    pub offset: usize,
    pub width: usize,
    pub angle: usize,
}

impl BankCounts {
    pub fn kernels(&self) -> usize {
        self.offset * self.width * self.angle
    }
}

/// Real parameters of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CellParams {
    pub offset: f64,
    pub width: f64,
    pub angle: f64,
}

#[derive(Clone, Debug)]
pub struct DetectorBank {
    kind: DetectorKind,
    ranges: BankRanges,
    counts: BankCounts,
    half_length: usize,
    transpose_flips_offset: bool,
    grid: Grid<f32>,
    norm: Option<f32>,
    build_ms: f64,
}

impl DetectorBank {
    /// Builds and paints every kernel.
    pub fn new(params: &BankParams) -> Result<Self, BankError> {
        let start = Instant::now();
        let ranges = params.ranges();
        let counts = ranges.counts()?;
        let support = params.support();
        let mut grid = Grid::new([support, support, counts.offset, counts.width, counts.angle]);

        let half_length = params.half_length as f64;
        #[cfg(feature = "parallel")]
        assemble_parallel(params.kind, &ranges, counts, half_length, &mut grid);
        #[cfg(not(feature = "parallel"))]
        assemble_sequential(params.kind, &ranges, counts, half_length, &mut grid);

        let norm = match params.kind {
            DetectorKind::HalfSpace => Some(grid.kernel(grid.index(0, 0, 0)).sum() - 1.0),
            DetectorKind::Line => None,
        };
        let build_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "DetectorBank::new kind={:?} support={} counts={}x{}x{} bytes={} elapsed_ms={:.3}",
            params.kind,
            support,
            counts.offset,
            counts.width,
            counts.angle,
            grid.byte_strides()[0],
            build_ms
        );
        Ok(Self {
            kind: params.kind,
            ranges,
            counts,
            half_length: params.half_length,
            transpose_flips_offset: params.transpose_flips_offset,
            grid,
            norm,
            build_ms,
        })
    }

    pub fn kind(&self) -> DetectorKind {
        self.kind
    }

    pub fn grid(&self) -> &Grid<f32> {
        &self.grid
    }

    /// The whole kernel buffer, addressed by [`DetectorBank::strides`].
    pub fn data(&self) -> &[f32] {
        self.grid.as_slice()
    }

    pub fn strides(&self) -> &[usize; NDIM + 1] {
        self.grid.strides()
    }

    pub fn byte_strides(&self) -> &[usize; NDIM + 1] {
        self.grid.byte_strides()
    }

    /// Side of each square kernel image.
    pub fn support(&self) -> usize {
        self.grid.image_width()
    }

    pub fn half_length(&self) -> usize {
        self.half_length
    }

    /// Point the primitives are placed on: the centre of the middle pixel.
    pub fn anchor(&self) -> Point {
        kernel_anchor(self.support())
    }

    pub fn ranges(&self) -> &BankRanges {
        &self.ranges
    }

    pub fn offset_range(&self) -> &DiscretizationRange {
        &self.ranges.offset
    }

    pub fn width_range(&self) -> &DiscretizationRange {
        &self.ranges.width
    }

    pub fn angle_range(&self) -> &DiscretizationRange {
        &self.ranges.angle
    }

    pub fn counts(&self) -> BankCounts {
        self.counts
    }

    /// Sum of the first half-space kernel minus one; `None` for line banks.
    pub fn norm(&self) -> Option<f32> {
        self.norm
    }

    /// Wall-clock construction time in milliseconds.
    pub fn build_ms(&self) -> f64 {
        self.build_ms
    }

    pub fn transpose_flips_offset(&self) -> bool {
        self.transpose_flips_offset
    }

    /// Flat element offset of a kernel image. Unchecked.
    #[inline]
    pub fn index_of(&self, ioffset: usize, iwidth: usize, iangle: usize) -> usize {
        self.grid.index(ioffset, iwidth, iangle)
    }

    #[inline]
    pub fn index_at(&self, cell: CellIndex) -> usize {
        self.index_of(cell.offset, cell.width, cell.angle)
    }

    /// Kernel image of one cell. Panics if an index is outside its extent.
    pub fn kernel(&self, ioffset: usize, iwidth: usize, iangle: usize) -> KernelView<'_, f32> {
        assert!(
            ioffset < self.counts.offset
                && iwidth < self.counts.width
                && iangle < self.counts.angle,
            "cell ({ioffset}, {iwidth}, {iangle}) outside bank"
        );
        self.grid.kernel(self.index_of(ioffset, iwidth, iangle))
    }

    pub fn kernel_at(&self, cell: CellIndex) -> KernelView<'_, f32> {
        self.kernel(cell.offset, cell.width, cell.angle)
    }

    pub fn cell_values(&self, cell: CellIndex) -> CellParams {
        self.ranges.cell_params(cell)
    }

    /// All cells in buffer order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.counts.kernels()).map(|k| CellIndex::from_linear(k, self.counts))
    }
}

#[inline]
fn kernel_anchor(support: usize) -> Point {
    let half = support as f64 / 2.0;
    Point::new(half, half)
}

/// Paints the kernel image at buffer position `k`.
fn paint_cell(
    recipe: Recipe,
    ranges: &BankRanges,
    counts: BankCounts,
    half_length: f64,
    support: usize,
    k: usize,
    chunk: &mut [f32],
) {
    let cell = ranges.cell_params(CellIndex::from_linear(k, counts));
    let mut view = KernelViewMut::new(chunk, support, support);
    render_kernel(recipe, &cell, half_length, kernel_anchor(support), &mut view);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn assemble_sequential(
    kind: DetectorKind,
    ranges: &BankRanges,
    counts: BankCounts,
    half_length: f64,
    grid: &mut Grid<f32>,
) {
    let (support, image_len) = (grid.image_width(), grid.image_len());
    let recipe = kind.recipe();
    grid.as_mut_slice()
        .chunks_exact_mut(image_len)
        .enumerate()
        .for_each(|(k, chunk)| {
            paint_cell(recipe, ranges, counts, half_length, support, k, chunk)
        });
}

#[cfg(feature = "parallel")]
fn assemble_parallel(
    kind: DetectorKind,
    ranges: &BankRanges,
    counts: BankCounts,
    half_length: f64,
    grid: &mut Grid<f32>,
) {
    use rayon::prelude::*;

    let (support, image_len) = (grid.image_width(), grid.image_len());
    let recipe = kind.recipe();
    grid.as_mut_slice()
        .par_chunks_exact_mut(image_len)
        .enumerate()
        .for_each(|(k, chunk)| {
            paint_cell(recipe, ranges, counts, half_length, support, k, chunk)
        });
}
