//! favicongen CLI
//!
//! `favicongen --source <image> --output <dir> [options]`
//! `favicongen <image> <dir>`
//! Returns 1 on any fatal error.

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use favicongen::{
    config::{
        BuildInfo, Config, DEFAULT_COLOR, DEFAULT_DISPLAY, DEFAULT_ORIENTATION, DEFAULT_OUTPUT_DIR,
        DEFAULT_SCOPE, DEFAULT_SIZES, DEFAULT_START_URL,
    },
    parse_categories, parse_sizes, run, SystemRunner, ValidationError,
};

const EXAMPLES: &str = "\
Examples:
  favicongen logo.svg ./public/favicons
  favicongen --source logo.png --output ./dist --sizes 16,32,64
  favicongen --source logo.svg --manifest --app-name \"My App\"
  favicongen --generate-html-tags --output ./public --sizes 16,32,64";

#[derive(Parser, Debug)]
#[command(name = "favicongen")]
#[command(about = "Generate favicon files from a single image")]
#[command(disable_version_flag = true, disable_help_subcommand = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source image file (SVG or PNG)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output directory [default: ./favicons]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Comma-separated sizes
    #[arg(long, default_value = DEFAULT_SIZES)]
    sizes: String,

    /// Image processor: imagemagick or vips (auto-detect if not specified)
    #[arg(long, default_value = "")]
    backend: String,

    /// Generate HTML tags file
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    html_tags: bool,

    /// Generate manifest.webmanifest
    #[arg(long, default_value_t = false, action = ArgAction::Set, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    manifest: bool,

    /// Generate favicon.ico
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    ico: bool,

    /// Only generate HTML tags from existing favicons
    #[arg(long)]
    generate_html_tags: bool,

    /// Application name
    #[arg(long, default_value = "")]
    app_name: String,

    /// Short application name
    #[arg(long, default_value = "")]
    app_short_name: String,

    /// Application description
    #[arg(long, default_value = "")]
    app_description: String,

    /// Start URL
    #[arg(long, default_value = DEFAULT_START_URL)]
    app_start_url: String,

    /// Display mode
    #[arg(long, default_value = DEFAULT_DISPLAY)]
    app_display: String,

    /// Orientation
    #[arg(long, default_value = DEFAULT_ORIENTATION)]
    app_orientation: String,

    /// Scope
    #[arg(long, default_value = DEFAULT_SCOPE)]
    app_scope: String,

    /// Theme color
    #[arg(long, default_value = DEFAULT_COLOR)]
    app_theme_color: String,

    /// Background color
    #[arg(long, default_value = DEFAULT_COLOR)]
    app_background_color: String,

    /// Comma-separated categories
    #[arg(long, default_value = "")]
    app_categories: String,

    /// Icon path
    #[arg(long, default_value = "")]
    app_icon: String,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Source image (shorthand for --source)
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Output directory (shorthand for --output)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Show version information
    Version,

    /// Show this help
    Help,
}

fn command(build: &BuildInfo) -> clap::Command {
    Cli::command()
        .before_help(format!(
            "favicongen v{} - Generate favicon files from a single image",
            build.version
        ))
        .after_help(EXAMPLES)
}

/// Flags win over positionals.
fn build_config(cli: Cli) -> Result<Config, ValidationError> {
    let sizes = parse_sizes(&cli.sizes)?;

    Ok(Config {
        source: cli.source.or(cli.image).unwrap_or_default(),
        output: cli
            .output
            .or(cli.dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        sizes,
        backend: cli.backend,
        generate_html: cli.html_tags,
        generate_manifest: cli.manifest,
        generate_ico: cli.ico,
        html_only: cli.generate_html_tags,
        app_name: cli.app_name,
        app_short_name: cli.app_short_name,
        app_description: cli.app_description,
        app_start_url: cli.app_start_url,
        app_display: cli.app_display,
        app_orientation: cli.app_orientation,
        app_scope: cli.app_scope,
        app_theme_color: cli.app_theme_color,
        app_background_color: cli.app_background_color,
        app_categories: parse_categories(&cli.app_categories),
        app_icon: cli.app_icon,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FAVICONGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let build = BuildInfo::current();
    let mut cmd = command(&build);

    if std::env::args_os().len() <= 1 {
        let _ = cmd.print_help();
        return ExitCode::SUCCESS;
    }

    let cli = match cmd.try_get_matches_from_mut(std::env::args_os())
        .and_then(|m| Cli::from_arg_matches(&m))
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match &cli.command {
        Some(Commands::Version) => {
            println!("{build}");
            return ExitCode::SUCCESS;
        }
        Some(Commands::Help) => {
            let _ = cmd.print_help();
            return ExitCode::SUCCESS;
        }
        None if cli.version => {
            println!("{build}");
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    let config = match build_config(cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid sizes format: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    match run(&config, Arc::new(SystemRunner), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
