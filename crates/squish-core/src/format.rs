const KIB: u64 = 1024;
const MIB: u64 = 1_048_576;

/// Human-readable size label, e.g. `Size: 1.23MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes > MIB {
        format!("Size: {:.2}MB", bytes as f64 / MIB as f64)
    } else if bytes > KIB {
        format!("Size: {:.2}KB", bytes as f64 / KIB as f64)
    } else {
        format!("Size: {:.2}B", bytes as f64)
    }
}

/// Size label with the compression ratio appended, e.g. `Size: 40.00KB  (12.5%)`.
pub fn format_size_with_ratio(bytes: u64, ratio_percent: f64) -> String {
    format!("{}  ({:.1}%)", format_file_size(bytes), ratio_percent)
}
