//! Command Driver
//!
//! Wires validation, backend selection, generation and the emitters together.
//! Progress goes to the supplied writer (stdout in the binary).

use std::io::{self, Write};
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::generator::{FaviconGenerator, GeneratorError};
use crate::html::{generate_html_tags, write_html_tags};
use crate::manifest::generate_manifest;
use crate::processor::{detect_processor, CommandRunner, ProcessorError};
use crate::validation::{validate_source, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to initialize image processor: {0}")]
    Processor(#[source] ProcessorError),

    #[error("failed to generate favicons: {0}")]
    Favicons(#[source] GeneratorError),

    #[error("failed to generate manifest: {0}")]
    Manifest(#[source] GeneratorError),

    #[error("failed to write HTML tags: {0}")]
    HtmlTags(#[source] GeneratorError),

    #[error("failed to write progress output: {0}")]
    Output(#[from] io::Error),
}

const RULE_WIDTH: usize = 50;

/// Execute one invocation described by `config`.
pub fn run(config: &Config, runner: Arc<dyn CommandRunner>, out: &mut dyn Write) -> Result<(), AppError> {
    if config.html_only {
        return run_html_only(config, out);
    }

    validate_source(&config.source)?;

    let processor = detect_processor(Some(config.backend.as_str()), runner).map_err(AppError::Processor)?;

    writeln!(out, "Using {} for image processing", processor.name())?;
    writeln!(out, "Source: {}", config.source.display())?;
    writeln!(out, "Output: {}", config.output.display())?;
    writeln!(out, "Sizes: {:?}", config.sizes)?;

    let generator = FaviconGenerator::new(
        &*processor,
        &config.source,
        &config.output,
        config.sizes.clone(),
    );

    let result = generator.generate().map_err(AppError::Favicons)?;
    writeln!(out, "\n✓ Generated {} favicon files", result.generated_files.len())?;

    if config.generate_ico {
        generate_ico_file(&generator, out)?;
    }

    if config.generate_manifest {
        let path = generate_manifest(&config.manifest_config(), &config.output)
            .map_err(AppError::Manifest)?;
        writeln!(out, "✓ Generated manifest: {}", path.display())?;
    }

    if config.generate_html {
        generate_html_tags_file(config, out)?;
    }

    Ok(())
}

/// Print tags (and optionally write the manifest) without touching any image.
fn run_html_only(config: &Config, out: &mut dyn Write) -> Result<(), AppError> {
    writeln!(out, "{}", generate_html_tags(&config.html_tags_config()))?;

    if config.generate_manifest {
        let path = generate_manifest(&config.manifest_config(), &config.output)
            .map_err(AppError::Manifest)?;
        writeln!(out, "\n✓ Generated manifest: {}", path.display())?;
    }

    Ok(())
}

/// ICO failure here only warns; the rest of the run continues.
fn generate_ico_file(generator: &FaviconGenerator<'_>, out: &mut dyn Write) -> Result<(), AppError> {
    let candidates = generator.ico_candidates();
    if candidates.is_empty() {
        tracing::debug!("no 16/32/48 PNGs present, skipping favicon.ico");
        return Ok(());
    }

    match generator.generate_ico(&candidates) {
        Ok(path) => writeln!(out, "✓ Generated favicon.ico: {}", path.display())?,
        Err(e) => tracing::warn!("{e}"),
    }

    Ok(())
}

fn generate_html_tags_file(config: &Config, out: &mut dyn Write) -> Result<(), AppError> {
    let tags = generate_html_tags(&config.html_tags_config());
    let path = write_html_tags(&tags, &config.output).map_err(AppError::HtmlTags)?;

    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "✓ Generated HTML tags: {}", path.display())?;
    writeln!(out, "\nHTML tags to include in your <head>:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{tags}")?;
    writeln!(out, "{rule}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::testing::FakeRunner;
    use crate::processor::CommandOutput;
    use std::fs;
    use std::path::Path;

    fn source_in(dir: &Path) -> std::path::PathBuf {
        let source = dir.join("logo.png");
        fs::write(&source, b"png").unwrap();
        source
    }

    #[test]
    fn test_html_only_skips_processing() {
        let runner = Arc::new(FakeRunner::with(&[]));
        let config = Config {
            html_only: true,
            sizes: vec![16, 32],
            ..Default::default()
        };
        let mut out: Vec<u8> = Vec::new();

        run(&config, runner.clone(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/favicon-32x32.png"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_html_only_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            html_only: true,
            generate_manifest: true,
            output: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut out: Vec<u8> = Vec::new();

        run(&config, Arc::new(FakeRunner::with(&[])), &mut out).unwrap();

        assert!(dir.path().join("manifest.webmanifest").exists());
        assert!(String::from_utf8(out).unwrap().contains("manifest.webmanifest"));
    }

    #[test]
    fn test_validation_runs_before_detection() {
        let config = Config::default();
        let err = run(&config, Arc::new(FakeRunner::with(&[])), &mut io::sink()).unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::SourceRequired)));
    }

    #[test]
    fn test_no_backend_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            source: source_in(dir.path()),
            output: dir.path().join("out"),
            ..Default::default()
        };
        let err = run(&config, Arc::new(FakeRunner::with(&[])), &mut io::sink()).unwrap_err();

        assert!(err.to_string().starts_with("failed to initialize image processor"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_full_pipeline_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        let config = Config {
            source: source_in(dir.path()),
            output: out_dir.clone(),
            sizes: vec![16, 180],
            generate_manifest: true,
            ..Default::default()
        };
        let runner = Arc::new(FakeRunner::with(&["magick"]));
        let mut out: Vec<u8> = Vec::new();

        run(&config, runner.clone(), &mut out).unwrap();

        // fake runner writes nothing, so there are no ICO candidates
        assert_eq!(runner.calls().len(), 2);
        assert!(out_dir.join("manifest.webmanifest").exists());
        let html = fs::read_to_string(out_dir.join("favicon-tags.html")).unwrap();
        assert!(html.contains("apple-touch-icon"));
        assert!(html.contains(r#"<link rel="manifest""#));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Using imagemagick for image processing"));
        assert!(text.contains("✓ Generated 2 favicon files"));
    }

    #[test]
    fn test_ico_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(out_dir.join("favicon-16x16.png"), b"x").unwrap();
        let config = Config {
            source: source_in(dir.path()),
            output: out_dir.clone(),
            sizes: vec![16],
            backend: "vips".into(),
            ..Default::default()
        };
        // vips present, ImageMagick absent: the ICO fallback cannot run
        let runner = Arc::new(FakeRunner::with(&["vips"]));

        run(&config, runner, &mut io::sink()).unwrap();

        assert!(out_dir.join("favicon-tags.html").exists());
        assert!(!out_dir.join("favicon.ico").exists());
    }

    #[test]
    fn test_resize_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            source: source_in(dir.path()),
            output: dir.path().join("out"),
            sizes: vec![16, 32],
            ..Default::default()
        };
        let runner = Arc::new(FakeRunner::failing(
            &["convert"],
            CommandOutput::failed("exit status: 1", "boom"),
        ));

        let err = run(&config, runner.clone(), &mut io::sink()).unwrap_err();

        assert!(matches!(err, AppError::Favicons(_)));
        assert!(err.to_string().contains("boom"));
        assert_eq!(runner.calls().len(), 1);
        assert!(!dir.path().join("out").join("favicon-tags.html").exists());
    }
}
