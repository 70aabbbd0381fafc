//! Run Configuration
//!
//! Built once at startup from the command line and passed down unchanged.

use std::fmt;
use std::path::PathBuf;

use crate::html::HtmlTagsConfig;
use crate::manifest::ManifestConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "./favicons";
pub const DEFAULT_SIZES: &str = "16,32,48,64,128,180,256,512";
pub const DEFAULT_START_URL: &str = "/";
pub const DEFAULT_DISPLAY: &str = "standalone";
pub const DEFAULT_ORIENTATION: &str = "any";
pub const DEFAULT_SCOPE: &str = "/";
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Version metadata stamped at compile time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub build_date: String,
    pub commit: String,
}

impl BuildInfo {
    /// Reads `FAVICONGEN_BUILD_DATE` / `FAVICONGEN_COMMIT` if set during the build.
    pub fn current() -> Self {
        Self {
            version: crate::VERSION.to_string(),
            build_date: option_env!("FAVICONGEN_BUILD_DATE").unwrap_or("unknown").to_string(),
            commit: option_env!("FAVICONGEN_COMMIT").unwrap_or("unknown").to_string(),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "favicongen version {}", self.version)?;
        writeln!(f, "Build date: {}", self.build_date)?;
        write!(f, "Commit: {}", self.commit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    /// Empty means auto-detect.
    pub backend: String,
    pub generate_html: bool,
    pub generate_manifest: bool,
    pub generate_ico: bool,
    pub html_only: bool,
    pub app_name: String,
    pub app_short_name: String,
    pub app_description: String,
    pub app_start_url: String,
    pub app_display: String,
    pub app_orientation: String,
    pub app_scope: String,
    pub app_theme_color: String,
    pub app_background_color: String,
    pub app_categories: Vec<String>,
    pub app_icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: vec![16, 32, 48, 64, 128, 180, 256, 512],
            backend: String::new(),
            generate_html: true,
            generate_manifest: false,
            generate_ico: true,
            html_only: false,
            app_name: String::new(),
            app_short_name: String::new(),
            app_description: String::new(),
            app_start_url: DEFAULT_START_URL.to_string(),
            app_display: DEFAULT_DISPLAY.to_string(),
            app_orientation: DEFAULT_ORIENTATION.to_string(),
            app_scope: DEFAULT_SCOPE.to_string(),
            app_theme_color: DEFAULT_COLOR.to_string(),
            app_background_color: DEFAULT_COLOR.to_string(),
            app_categories: vec![],
            app_icon: String::new(),
        }
    }
}

impl Config {
    pub fn manifest_config(&self) -> ManifestConfig {
        ManifestConfig {
            name: self.app_name.clone(),
            short_name: self.app_short_name.clone(),
            description: self.app_description.clone(),
            start_url: self.app_start_url.clone(),
            display: self.app_display.clone(),
            orientation: self.app_orientation.clone(),
            scope: self.app_scope.clone(),
            theme_color: self.app_theme_color.clone(),
            background_color: self.app_background_color.clone(),
            categories: self.app_categories.clone(),
            icon_path: self.app_icon.clone(),
            icon_sizes: self.sizes.clone(),
        }
    }

    pub fn html_tags_config(&self) -> HtmlTagsConfig {
        HtmlTagsConfig {
            sizes: self.sizes.clone(),
            include_manifest: self.generate_manifest,
            theme_color: self.app_theme_color.clone(),
        }
    }
}
