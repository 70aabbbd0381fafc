use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{execute, CommandRunner, ImageMagickProcessor, Processor, ProcessorError};

const NAME: &str = "vips";

/// libvips backend.
///
/// `vips thumbnail --size down` only shrinks and keeps the aspect ratio, so
/// a non-square source yields a non-square PNG. ImageMagick pads to an exact
/// square instead. Both behaviours are kept as they are.
pub struct VipsProcessor {
    runner: Arc<dyn CommandRunner>,
}

impl VipsProcessor {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Processor for VipsProcessor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.runner.exists("vips")
    }

    fn resize(&self, input: &Path, output: &Path, size: u32) -> Result<(), ProcessorError> {
        let args = vec![
            "thumbnail".to_string(),
            input.display().to_string(),
            output.display().to_string(),
            size.to_string(),
            "--size".to_string(),
            "down".to_string(),
        ];

        execute(self.runner.as_ref(), NAME, "resize", "vips", &args)
    }

    /// vips cannot write ICO; hand the job to ImageMagick.
    fn convert_to_ico(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError> {
        let magick = ImageMagickProcessor::new(self.runner.clone());
        if !magick.is_available() {
            return Err(ProcessorError::IcoRequiresImageMagick);
        }

        tracing::debug!("vips has no ICO writer, delegating to imagemagick");
        magick.convert_to_ico(inputs, output)
    }
}
