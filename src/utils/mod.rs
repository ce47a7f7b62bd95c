// watermarker/src/utils/mod.rs
use crate::core::{Result, WatermarkError};
use std::path::{Path, PathBuf};

/// Output location for `input`: same file name, inside `output_dir`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        WatermarkError::InvalidPath(format!("Invalid file name: {}", input.display()))
    })?;

    Ok(output_dir.join(file_name))
}

/// True when both paths resolve to the same existing directory.
pub fn is_same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.ln() / base.ln()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
