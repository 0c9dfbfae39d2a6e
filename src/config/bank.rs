use crate::bank::BankParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BankToolConfig {
    #[serde(default)]
    pub bank: BankParams,
    #[serde(default)]
    pub output: BankOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BankOutputConfig {
    /// Where to write the JSON `BankReport`.
    pub report_json: PathBuf,
    /// Optional PNG montage of one width slice.
    pub montage_png: Option<PathBuf>,
    pub montage_width_index: usize,
}

impl Default for BankOutputConfig {
    fn default() -> Self {
        Self {
            report_json: PathBuf::from("out/bank_report.json"),
            montage_png: None,
            montage_width_index: 0,
        }
    }
}

pub fn load_config(path: &Path) -> Result<BankToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(contents: &str) -> Result<BankToolConfig, serde_json::Error> {
    serde_json::from_str(contents)
}
