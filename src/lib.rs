//! Favicongen - Favicon Set Generator
//!
//! Turns one SVG or PNG into:
//! 1. `favicon-{N}x{N}.png` for every requested size
//! 2. A multi-resolution `favicon.ico`
//! 3. An HTML `<head>` snippet
//! 4. A `manifest.webmanifest`
//!
//! Pixel work is delegated to ImageMagick or libvips; this crate only
//! orchestrates them.

pub mod app;
pub mod config;
pub mod generator;
pub mod html;
pub mod manifest;
pub mod processor;
pub mod validation;

pub use app::{run, AppError};
pub use config::{BuildInfo, Config};
pub use generator::{favicon_file_name, FaviconGenerator, GenerateResult, GeneratorError};
pub use html::{generate_html_tags, HtmlTagsConfig};
pub use manifest::{generate_manifest, Manifest, ManifestConfig, ManifestIcon};
pub use processor::{detect_processor, CommandRunner, Processor, ProcessorError, SystemRunner};
pub use validation::{parse_categories, parse_sizes, validate_source, ValidationError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
