use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{execute, CommandRunner, Processor, ProcessorError};

const NAME: &str = "imagemagick";

/// ImageMagick backend. Pads and center-crops so output is always an exact square.
pub struct ImageMagickProcessor {
    runner: Arc<dyn CommandRunner>,
}

impl ImageMagickProcessor {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Program and leading arguments for a convert operation.
    ///
    /// ImageMagick 7 ships a single `magick` dispatcher; 6.x only has `convert`.
    pub fn convert_command(&self) -> (&'static str, Vec<String>) {
        if self.runner.exists("magick") {
            ("magick", vec!["convert".to_string()])
        } else {
            ("convert", vec![])
        }
    }
}

impl Processor for ImageMagickProcessor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.runner.exists("magick") || self.runner.exists("convert")
    }

    fn resize(&self, input: &Path, output: &Path, size: u32) -> Result<(), ProcessorError> {
        let (program, mut args) = self.convert_command();
        let geometry = format!("{size}x{size}");
        args.extend([
            input.display().to_string(),
            "-resize".to_string(),
            geometry.clone(),
            "-background".to_string(),
            "none".to_string(),
            "-gravity".to_string(),
            "center".to_string(),
            "-extent".to_string(),
            geometry,
            output.display().to_string(),
        ]);

        execute(self.runner.as_ref(), NAME, "resize", program, &args)
    }

    fn convert_to_ico(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError> {
        let (program, mut args) = self.convert_command();
        args.extend(inputs.iter().map(|p| p.display().to_string()));
        args.push(output.display().to_string());

        execute(self.runner.as_ref(), NAME, "ico conversion", program, &args)
    }
}
