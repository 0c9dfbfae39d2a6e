use serde::Serialize;
use std::time::Instant;

/// One named step of building or exporting a bank, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTiming {
    pub step: String,
    pub ms: f64,
}

/// Steps in the order they ran; `total_ms` is their sum.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    pub total_ms: f64,
    pub steps: Vec<StepTiming>,
}

impl Timings {
    /// Records a step measured elsewhere (e.g. `DetectorBank::build_ms`).
    pub fn record(&mut self, step: &str, ms: f64) {
        self.total_ms += ms;
        self.steps.push(StepTiming {
            step: step.to_owned(),
            ms,
        });
    }

    /// Runs `f` and records its wall-clock time under `step`.
    pub fn measure<R>(&mut self, step: &str, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let out = f();
        self.record(step, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn get(&self, step: &str) -> Option<f64> {
        self.steps.iter().find(|s| s.step == step).map(|s| s.ms)
    }
}
