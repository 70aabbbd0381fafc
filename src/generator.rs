//! Favicon Generation
//!
//! One resize per requested size, fail-fast. The ICO bundle is a separate step.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::processor::{Processor, ProcessorError};

/// Sizes bundled into `favicon.ico` when their PNGs exist.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

pub const ICO_FILE_NAME: &str = "favicon.ico";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to generate {size}x{size} favicon: {source}")]
    Resize {
        size: u32,
        #[source]
        source: ProcessorError,
    },

    #[error("failed to generate ICO file: {0}")]
    Ico(#[source] ProcessorError),

    #[error("failed to marshal manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `favicon-{size}x{size}.png`
pub fn favicon_file_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    pub generated_files: Vec<PathBuf>,
    pub ico_path: Option<PathBuf>,
}

pub struct FaviconGenerator<'a> {
    processor: &'a dyn Processor,
    source: PathBuf,
    output_dir: PathBuf,
    sizes: Vec<u32>,
}

impl<'a> FaviconGenerator<'a> {
    pub fn new(
        processor: &'a dyn Processor,
        source: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        sizes: Vec<u32>,
    ) -> Self {
        Self {
            processor,
            source: source.into(),
            output_dir: output_dir.into(),
            sizes,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and render every size in order.
    ///
    /// The first failing size aborts the run; later sizes are not attempted.
    pub fn generate(&self) -> Result<GenerateResult, GeneratorError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| GeneratorError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut generated_files = Vec::with_capacity(self.sizes.len());

        for &size in &self.sizes {
            let output = self.output_dir.join(favicon_file_name(size));

            self.processor
                .resize(&self.source, &output, size)
                .map_err(|source| GeneratorError::Resize { size, source })?;

            tracing::info!(path = %output.display(), size, "generated favicon");
            generated_files.push(output);
        }

        Ok(GenerateResult {
            generated_files,
            ico_path: None,
        })
    }

    /// Bundle `png_paths` into `favicon.ico` inside the output directory.
    pub fn generate_ico(&self, png_paths: &[PathBuf]) -> Result<PathBuf, GeneratorError> {
        let ico_path = self.output_dir.join(ICO_FILE_NAME);

        self.processor
            .convert_to_ico(png_paths, &ico_path)
            .map_err(GeneratorError::Ico)?;

        Ok(ico_path)
    }

    /// The ICO candidates that actually exist on disk.
    pub fn ico_candidates(&self) -> Vec<PathBuf> {
        ICO_SIZES
            .iter()
            .map(|&size| self.output_dir.join(favicon_file_name(size)))
            .filter(|path| path.exists())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockProcessor;
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(favicon_file_name(180), "favicon-180x180.png");
    }

    #[test]
    fn test_generate_writes_each_size() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("favicons");
        let mock = MockProcessor::default();
        let generator = FaviconGenerator::new(&mock, "logo.svg", &out, vec![16, 32, 48]);

        let result = generator.generate().unwrap();

        assert_eq!(result.generated_files.len(), 3);
        assert_eq!(result.generated_files[1], out.join("favicon-32x32.png"));
        assert!(result.ico_path.is_none());
        assert!(out.join("favicon-48x48.png").exists());

        let calls = mock.resize_calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, PathBuf::from("logo.svg"));
        assert_eq!(calls[2].2, 48);
    }

    #[test]
    fn test_generate_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("c");
        let mock = MockProcessor::default();

        FaviconGenerator::new(&mock, "logo.png", &out, vec![16])
            .generate()
            .unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn test_generate_existing_dir_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockProcessor::default();
        let generator = FaviconGenerator::new(&mock, "logo.png", dir.path(), vec![16, 16]);

        assert_eq!(generator.generate().unwrap().generated_files.len(), 2);
        assert_eq!(generator.generate().unwrap().generated_files.len(), 2);
    }

    #[test]
    fn test_generate_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockProcessor {
            fail_resize_at: Some(32),
            ..Default::default()
        };

        let err = FaviconGenerator::new(&mock, "logo.png", dir.path(), vec![16, 32, 48])
            .generate()
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Resize { size: 32, .. }));
        assert!(err.to_string().contains("failed to generate 32x32 favicon"));
        assert_eq!(mock.resize_calls.borrow().len(), 2);
    }

    #[test]
    fn test_generate_ico() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockProcessor::default();
        let generator = FaviconGenerator::new(&mock, "logo.png", dir.path(), vec![]);
        let inputs = vec![dir.path().join("favicon-16x16.png")];

        let ico = generator.generate_ico(&inputs).unwrap();

        assert_eq!(ico, dir.path().join("favicon.ico"));
        let calls = mock.ico_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, inputs);
    }

    #[test]
    fn test_generate_ico_error() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockProcessor {
            fail_ico: true,
            ..Default::default()
        };
        let generator = FaviconGenerator::new(&mock, "logo.png", dir.path(), vec![]);

        let err = generator.generate_ico(&[]).unwrap_err();
        assert!(err.to_string().starts_with("failed to generate ICO file"));
    }

    #[test]
    fn test_ico_candidates_only_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("favicon-16x16.png"), b"x").unwrap();
        fs::write(dir.path().join("favicon-48x48.png"), b"x").unwrap();
        let mock = MockProcessor::default();
        let generator = FaviconGenerator::new(&mock, "logo.png", dir.path(), vec![]);

        assert_eq!(
            generator.ico_candidates(),
            vec![
                dir.path().join("favicon-16x16.png"),
                dir.path().join("favicon-48x48.png"),
            ]
        );
    }
}
