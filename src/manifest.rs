//! Web App Manifest
//!
//! Serialized with serde; empty optional fields are left out of the JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::generator::{favicon_file_name, GeneratorError};

pub const MANIFEST_FILE_NAME: &str = "manifest.webmanifest";

/// Icons at least this large are flagged maskable.
pub const MASKABLE_MIN_SIZE: u32 = 192;

/// App metadata plus the icon sizes to list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub orientation: String,
    pub scope: String,
    pub theme_color: String,
    pub background_color: String,
    pub categories: Vec<String>,
    /// Accepted from the command line; not referenced by the emitted icons.
    pub icon_path: String,
    pub icon_sizes: Vec<u32>,
}

fn is_empty(s: &str) -> bool {
    s.is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub short_name: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub description: String,
    pub start_url: String,
    pub display: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub orientation: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub scope: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub theme_color: String,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcon {
    pub fn for_size(size: u32) -> Self {
        Self {
            src: favicon_file_name(size),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: (size >= MASKABLE_MIN_SIZE).then(|| "any maskable".to_string()),
        }
    }
}

pub fn build_manifest(config: &ManifestConfig) -> Manifest {
    Manifest {
        name: config.name.clone(),
        short_name: config.short_name.clone(),
        description: config.description.clone(),
        start_url: config.start_url.clone(),
        display: config.display.clone(),
        orientation: config.orientation.clone(),
        scope: config.scope.clone(),
        theme_color: config.theme_color.clone(),
        background_color: config.background_color.clone(),
        categories: config.categories.clone(),
        icons: config.icon_sizes.iter().map(|&s| ManifestIcon::for_size(s)).collect(),
    }
}

/// Write `manifest.webmanifest` (2-space indented JSON) into `output_dir`.
pub fn generate_manifest(config: &ManifestConfig, output_dir: &Path) -> Result<PathBuf, GeneratorError> {
    let data = serde_json::to_string_pretty(&build_manifest(config))?;

    let path = output_dir.join(MANIFEST_FILE_NAME);
    fs::write(&path, data).map_err(|source| GeneratorError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
