use detector_bank::config::bank as bank_config;
use detector_bank::diagnostics::{BankReport, Timings};
use detector_bank::image::io::{save_kernel_montage, write_json_file};
use detector_bank::DetectorBank;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = bank_config::load_config(Path::new(&config_path))?;

    let bank = DetectorBank::new(&config.bank).map_err(|e| format!("Bank build failed: {e}"))?;

    let mut timing = Timings::default();
    let mut report = timing.measure("report", || BankReport::from_bank(&bank));

    if let Some(montage_path) = &config.output.montage_png {
        timing.measure("montage", || {
            save_kernel_montage(&bank, config.output.montage_width_index, montage_path)
        })?;
        println!("Saved montage to {}", montage_path.display());
    }
    for step in timing.steps {
        report.timing.record(&step.step, step.ms);
    }

    write_json_file(&config.output.report_json, &report)?;
    println!(
        "kind={:?} support={} kernels={} build_ms={:.1} -> {}",
        bank.kind(),
        bank.support(),
        report.kernels.len(),
        bank.build_ms(),
        config.output.report_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: bank_dump <config.json>".to_string()
}
