//! HTML `<head>` snippet for the generated favicons

use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::{favicon_file_name, GeneratorError};

pub const HTML_FILE_NAME: &str = "favicon-tags.html";

/// Smallest size advertised as the apple-touch-icon.
pub const APPLE_TOUCH_MIN_SIZE: u32 = 180;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlTagsConfig {
    pub sizes: Vec<u32>,
    pub include_manifest: bool,
    pub theme_color: String,
}

/// Build the newline-joined `<link>`/`<meta>` tags. Pure.
pub fn generate_html_tags(config: &HtmlTagsConfig) -> String {
    let mut tags = vec![r#"<link rel="icon" href="/favicon.ico" sizes="any">"#.to_string()];

    for &size in &config.sizes {
        tags.push(format!(
            r#"<link rel="icon" type="image/png" sizes="{size}x{size}" href="/{}">"#,
            favicon_file_name(size)
        ));
    }

    // first qualifying size in list order, not the largest
    if let Some(size) = config.sizes.iter().find(|&&s| s >= APPLE_TOUCH_MIN_SIZE) {
        tags.push(format!(
            r#"<link rel="apple-touch-icon" sizes="{size}x{size}" href="/{}">"#,
            favicon_file_name(*size)
        ));
    }

    if config.include_manifest {
        tags.push(r#"<link rel="manifest" href="/manifest.webmanifest">"#.to_string());
    }

    if !config.theme_color.is_empty() {
        tags.push(format!(
            r#"<meta name="theme-color" content="{}">"#,
            config.theme_color
        ));
    }

    tags.join("\n")
}

/// Write the tags to `favicon-tags.html` in `output_dir`.
pub fn write_html_tags(tags: &str, output_dir: &Path) -> Result<PathBuf, GeneratorError> {
    let path = output_dir.join(HTML_FILE_NAME);
    fs::write(&path, tags).map_err(|source| GeneratorError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
