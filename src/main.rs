//! hcm - Hierarchical Config Merge
//!
//! Entry point for the hcm CLI application.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hcm::cli::Cli;
use hcm::config::{generate_example_config, load_config, Config};
use hcm::document::{ConfigDocument, Mapping};
use hcm::error::{exit_code, HcmError};
use hcm::merge::{merge_targets, MergeOptions, MergeResult, TargetMerge};
use hcm::output::{format_warning, render_chain, render_document};
use hcm::resolve_chain;
use hcm::utils::{global_config_file, local_config_file, LOCAL_CONFIG_FILE_NAME};

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "HCM_LOG";

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(hcm_err) = err.downcast_ref::<HcmError>() {
                eprintln!("Error: {hcm_err}");
                return ExitCode::from(hcm_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    init_tracing(cli.debug);

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.example_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    let base_dir = cli.base_dir();
    let targets = cli.targets();

    if cli.debug {
        print_debug_header();
        print_debug_paths(&base_dir);
    }

    if cli.print_chain {
        for target in &targets {
            let chain = resolve_chain(&base_dir, target).map_err(HcmError::from)?;
            print!("{}", render_chain(&chain));
        }
        return Ok(exit_code::SUCCESS);
    }

    // Load tool config, then let CLI flags override it
    let mut config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &base_dir)?
    };
    cli.apply_to(&mut config);
    tracing::debug!(?config, "effective tool config");

    let options = config.merge_options()?;
    let use_colors = io::stderr().is_terminal();

    let (document, error_count) = if targets.len() == 1 {
        merge_single(&base_dir, &targets[0], &options, use_colors)?
    } else {
        merge_batch(&base_dir, &targets, &options, use_colors)?
    };

    let rendered = render_document(&document, config.output_format())?;
    io::stdout()
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;

    if cli.strict && error_count > 0 {
        return Err(HcmError::LevelErrors { count: error_count }.into());
    }

    Ok(exit_code::SUCCESS)
}

/// Merge one target and print its level errors.
fn merge_single(
    base_dir: &Path,
    target: &Path,
    options: &MergeOptions,
    use_colors: bool,
) -> Result<(ConfigDocument, usize)> {
    let result = hcm::merge_hierarchical_configs_with(base_dir, target, options)
        .map_err(HcmError::from)?;
    let error_count = print_warnings(&result, use_colors);
    Ok((result.document, error_count))
}

/// Merge several targets, keyed by the target path as given.
///
/// Targets whose chain cannot be resolved are reported and left out; if none
/// resolves, the first path error is returned.
fn merge_batch(
    base_dir: &Path,
    targets: &[std::path::PathBuf],
    options: &MergeOptions,
    use_colors: bool,
) -> Result<(ConfigDocument, usize)> {
    let mut merged = Mapping::new();
    let mut error_count = 0;
    let mut first_path_error = None;

    for TargetMerge { target, result } in merge_targets(base_dir, targets, options) {
        match result {
            Ok(result) => {
                error_count += print_warnings(&result, use_colors);
                merged.insert(target.display().to_string(), result.document);
            }
            Err(err) => {
                eprintln!("Error: {err}");
                error_count += 1;
                first_path_error.get_or_insert(err);
            }
        }
    }

    if merged.is_empty() {
        if let Some(err) = first_path_error {
            return Err(HcmError::from(err).into());
        }
    }

    Ok((ConfigDocument::Mapping(merged), error_count))
}

fn print_warnings(result: &MergeResult, use_colors: bool) -> usize {
    for error in &result.errors {
        eprintln!("{}", format_warning(error, use_colors));
    }
    result.errors.len()
}

/// Install the stderr log subscriber.
///
/// `HCM_LOG` takes precedence; otherwise `--debug` selects debug output and
/// only warnings are shown by default.
fn init_tracing(debug: bool) {
    let default_level = if debug { "hcm=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== hcm debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(base_dir: &Path) {
    eprintln!("Debug: File locations:");

    // Global config
    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    // Local config
    if let Some(cfg) = local_config_file(base_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/{} (exists: false)",
            base_dir.display(),
            LOCAL_CONFIG_FILE_NAME
        );
    }

    eprintln!();
}
