//! Before/after size statistics and their human-readable formatting

use std::fs;
use std::path::Path;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary magnitudes (1 KB = 1024 B).
///
/// Counts below 1024 print as whole bytes (`"0 B"`), everything else with two
/// decimals (`"1.50 KB"`). TB is the largest unit.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}

/// Percentage saved going from `original` to `compressed`.
///
/// An empty original yields 0.0. Output larger than the input gives a
/// negative value.
pub fn reduction_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Always two decimals, so an empty original prints as `"0.00%"`.
pub fn format_reduction(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// File sizes of an input and its compressed copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeStats {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl SizeStats {
    /// Read both sizes from disk; `None` unless both files exist
    pub fn measure(original: &Path, compressed: &Path) -> Option<Self> {
        let original_bytes = fs::metadata(original).ok()?.len();
        let compressed_bytes = fs::metadata(compressed).ok()?.len();
        Some(Self {
            original_bytes,
            compressed_bytes,
        })
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_bytes, self.compressed_bytes)
    }

    pub fn original_display(&self) -> String {
        format_bytes(self.original_bytes)
    }

    pub fn compressed_display(&self) -> String {
        format_bytes(self.compressed_bytes)
    }

    pub fn reduction_display(&self) -> String {
        format_reduction(self.reduction_percent())
    }
}
