//! Serializable summaries of a built detector bank.
//!
//! `BankReport` is what the tooling writes to disk: the bank layout, its
//! sampled axes, timing, and one `KernelSummary` per cell.

pub mod report;
pub mod timing;

pub use report::{BankReport, KernelSummary};
pub use timing::{StepTiming, Timings};
