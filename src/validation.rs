//! Input Validation
//!
//! Everything the user typed is checked here before any file is touched.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Source formats the backends are asked to read.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["svg", "png"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("source image is required (use --source or provide as first argument)")]
    SourceRequired,

    #[error("source file does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source must be SVG or PNG format, got: {0}")]
    UnsupportedFormat(String),

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("size must be positive: {0}")]
    NonPositiveSize(i64),
}

/// Check that the source image is given, exists, and is SVG or PNG.
pub fn validate_source(source: &Path) -> Result<(), ValidationError> {
    if source.as_os_str().is_empty() {
        return Err(ValidationError::SourceRequired);
    }

    if !source.exists() {
        return Err(ValidationError::SourceNotFound(source.to_path_buf()));
    }

    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        let shown = if ext.is_empty() { ext } else { format!(".{ext}") };
        return Err(ValidationError::UnsupportedFormat(shown));
    }

    Ok(())
}

/// Parse `"16, 32,48"` into `[16, 32, 48]`. Order and duplicates are kept.
pub fn parse_sizes(input: &str) -> Result<Vec<u32>, ValidationError> {
    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            let size: i64 = part
                .parse()
                .map_err(|_| ValidationError::InvalidSize(part.to_string()))?;
            if size <= 0 {
                return Err(ValidationError::NonPositiveSize(size));
            }
            u32::try_from(size).map_err(|_| ValidationError::InvalidSize(part.to_string()))
        })
        .collect()
}

/// Split a comma list of manifest categories. Empty input means none.
pub fn parse_categories(input: &str) -> Vec<String> {
    if input.is_empty() {
        return vec![];
    }
    input.split(',').map(|c| c.trim().to_string()).collect()
}
