//! Build script for hcm.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "hcm")]
#[command(
    author,
    version,
    about = "Deep-merge YAML configuration files along a directory hierarchy"
)]
#[command(
    long_about = "hcm resolves the configuration that applies to a directory. It walks \
    from BASE down to each TARGET, loads the config.yaml found in every directory on \
    the way and deep-merges them: nested mappings are merged key by key, deeper \
    directories win on conflicts, and sequences or scalars are replaced as a whole.\n\n\
    Files that cannot be read or parsed are reported as warnings and skipped."
)]
struct Cli {
    /// Base directory of the hierarchy
    #[arg(value_name = "BASE")]
    base_dir: Option<PathBuf>,

    /// Target directories (the base directory or below it)
    #[arg(value_name = "TARGET")]
    targets: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum)]
    output: Option<OutputFormat>,

    /// File name pattern selecting config files (can be repeated)
    #[arg(short, long, value_name = "GLOB")]
    pattern: Vec<String>,

    /// Do not report keys defined twice within one directory
    #[arg(long)]
    no_collisions: bool,

    /// Exit with an error if any file failed to load
    #[arg(long)]
    strict: bool,

    /// Print the resolved directory chain instead of merging
    #[arg(long)]
    print_chain: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Print an example config file
    #[arg(long)]
    example_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("HCM_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    if let Err(err) = man.render(&mut buffer) {
        println!("cargo:warning=failed to generate man page: {err}");
        return;
    }

    let man_path = out_dir.join("hcm.1");
    if let Err(err) = fs::write(&man_path, buffer) {
        println!("cargo:warning=failed to write man page: {err}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("hcm.1"));
        }
    }
}
