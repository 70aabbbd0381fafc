//! Image Processors - External Backends
//!
//! Pixel work is delegated to ImageMagick or libvips. Exactly one backend
//! is selected per run and never changes afterwards.

mod imagemagick;
mod runner;
mod vips;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub use imagemagick::ImageMagickProcessor;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use vips::VipsProcessor;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("preferred processor {0} is not available")]
    PreferredUnavailable(String),

    #[error("no image processor available (install ImageMagick or libvips)")]
    NoneAvailable,

    #[error("{backend} {operation} failed: {source}, output: ")]
    Spawn {
        backend: &'static str,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{backend} {operation} failed: {status}, output: {output}")]
    CommandFailed {
        backend: &'static str,
        operation: &'static str,
        status: String,
        output: String,
    },

    #[error("ICO creation requires ImageMagick (magick or convert command)")]
    IcoRequiresImageMagick,
}

/// Uniform capability set every backend provides
pub trait Processor {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    /// Write a `size`x`size` rendition of `input` to `output`.
    fn resize(&self, input: &Path, output: &Path, size: u32) -> Result<(), ProcessorError>;

    /// Bundle several PNGs into one multi-resolution ICO.
    fn convert_to_ico(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError>;
}

/// Known backends in priority order.
pub fn known_processors(runner: Arc<dyn CommandRunner>) -> Vec<Box<dyn Processor>> {
    vec![
        Box::new(ImageMagickProcessor::new(runner.clone())),
        Box::new(VipsProcessor::new(runner)),
    ]
}

/// Pick the backend for this run.
///
/// With a preference, only that backend is considered. Without one, the
/// first available backend in priority order wins.
pub fn detect_processor(
    preferred: Option<&str>,
    runner: Arc<dyn CommandRunner>,
) -> Result<Box<dyn Processor>, ProcessorError> {
    let processors = known_processors(runner);

    if let Some(name) = preferred.filter(|n| !n.is_empty()) {
        return processors
            .into_iter()
            .find(|p| p.name() == name && p.is_available())
            .ok_or_else(|| ProcessorError::PreferredUnavailable(name.to_string()));
    }

    processors
        .into_iter()
        .find(|p| p.is_available())
        .ok_or(ProcessorError::NoneAvailable)
}

/// Run one external command, mapping failures to `ProcessorError`.
pub(crate) fn execute(
    runner: &dyn CommandRunner,
    backend: &'static str,
    operation: &'static str,
    program: &str,
    args: &[String],
) -> Result<(), ProcessorError> {
    let output = runner
        .run(program, args)
        .map_err(|source| ProcessorError::Spawn { backend, operation, source })?;

    if !output.success {
        return Err(ProcessorError::CommandFailed {
            backend,
            operation,
            status: output.status,
            output: output.combined,
        });
    }

    Ok(())
}
