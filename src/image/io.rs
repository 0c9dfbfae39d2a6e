//! I/O helpers for inspecting a built bank.
//!
//! - `save_kernel_montage`: tile every (angle, offset) kernel of one width
//!   index into a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageView;
use crate::bank::{CellIndex, DetectorBank};
use crate::error::BankError;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Gap between montage tiles, in pixels.
const TILE_GAP: usize = 1;

/// Saves the kernels for `width_index` as a montage: one row of tiles per
/// angle, one column per offset. Values are mapped linearly from the
/// montage's [min, max] to [0, 255]; gaps are mid-gray.
pub fn save_kernel_montage(
    bank: &DetectorBank,
    width_index: usize,
    path: &Path,
) -> Result<(), String> {
    let counts = bank.counts();
    if width_index >= counts.width {
        return Err(BankError::OutOfRange {
            axis: crate::error::Axis::Width,
            index: width_index as i64,
            extent: counts.width,
        }
        .to_string());
    }
    ensure_parent_dir(path)?;

    let support = bank.support();
    let tile = support + TILE_GAP;
    let out_w = counts.offset * tile - TILE_GAP;
    let out_h = counts.angle * tile - TILE_GAP;

    let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
    for a in 0..counts.angle {
        for o in 0..counts.offset {
            for &v in bank.kernel(o, width_index, a).pixels() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut out = GrayImage::from_pixel(out_w as u32, out_h as u32, Luma([128u8]));
    for a in 0..counts.angle {
        for o in 0..counts.offset {
            let cell = CellIndex {
                offset: o,
                width: width_index,
                angle: a,
            };
            let k = bank.kernel_at(cell);
            let (ox, oy) = (o * tile, a * tile);
            for (y, row) in k.rows().enumerate() {
                for (x, &v) in row.iter().enumerate() {
                    let g = ((v - lo) / span * 255.0).clamp(0.0, 255.0);
                    out.put_pixel((ox + x) as u32, (oy + y) as u32, Luma([g as u8]));
                }
            }
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
