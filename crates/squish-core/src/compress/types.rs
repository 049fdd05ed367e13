use std::path::PathBuf;

use crate::format::format_size_with_ratio;

/// Outcome of one encode. A new value replaces the previous one; it is never
/// updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressionResult {
    pub output_path: PathBuf,
    pub output_size_bytes: u64,
    pub input_size_bytes: u64,
    /// `output / input * 100`; `0.0` for an empty input.
    pub ratio_percent: f64,
}

impl CompressionResult {
    pub fn new(output_path: PathBuf, output_size_bytes: u64, input_size_bytes: u64) -> Self {
        let ratio_percent = if input_size_bytes == 0 {
            0.0
        } else {
            output_size_bytes as f64 / input_size_bytes as f64 * 100.0
        };
        Self {
            output_path,
            output_size_bytes,
            input_size_bytes,
            ratio_percent,
        }
    }

    /// `Size: 40.00KB  (12.5%)`
    pub fn size_label(&self) -> String {
        format_size_with_ratio(self.output_size_bytes, self.ratio_percent)
    }
}
