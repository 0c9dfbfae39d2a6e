use super::Timings;
use crate::bank::{BankCounts, BankRanges, CellIndex, DetectorBank, DetectorKind};
use crate::grid::NDIM;
use serde::Serialize;

/// Statistics of one kernel image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelSummary {
    pub cell: CellIndex,
    pub offset: f64,
    pub width: f64,
    pub angle: f64,
    pub sum: f32,
    pub min: f32,
    pub max: f32,
}

impl KernelSummary {
    pub fn of(bank: &DetectorBank, cell: CellIndex) -> Self {
        let values = bank.cell_values(cell);
        let kernel = bank.kernel_at(cell);
        let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
        for &v in kernel.pixels() {
            min = min.min(v);
            max = max.max(v);
        }
        Self {
            cell,
            offset: values.offset,
            width: values.width,
            angle: values.angle,
            sum: kernel.sum(),
            min,
            max,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankReport {
    pub kind: DetectorKind,
    pub support: usize,
    /// Innermost-first grid shape.
    pub shape: [usize; NDIM],
    pub strides: [usize; NDIM + 1],
    pub byte_strides: [usize; NDIM + 1],
    pub ranges: BankRanges,
    pub counts: BankCounts,
    pub norm: Option<f32>,
    pub timing: Timings,
    pub kernels: Vec<KernelSummary>,
}

impl BankReport {
    /// Summarizes every kernel; timing starts with the bank's build time.
    pub fn from_bank(bank: &DetectorBank) -> Self {
        let mut timing = Timings::default();
        timing.record("build", bank.build_ms());
        Self {
            kind: bank.kind(),
            support: bank.support(),
            shape: bank.grid().shape(),
            strides: *bank.strides(),
            byte_strides: *bank.byte_strides(),
            ranges: *bank.ranges(),
            counts: bank.counts(),
            norm: bank.norm(),
            timing,
            kernels: bank
                .cells()
                .map(|cell| KernelSummary::of(bank, cell))
                .collect(),
        }
    }
}
