//! CLI argument definitions for hcm.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use hcm::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Base dir: {:?}", cli.base_dir);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::{Config, OutputFormat};

/// Deep-merge YAML configuration files along a directory hierarchy.
#[derive(Parser, Debug)]
#[command(name = "hcm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory of the hierarchy
    #[arg(
        value_name = "BASE",
        required_unless_present_any = ["completions", "example_config"]
    )]
    pub base_dir: Option<PathBuf>,

    /// Target directories (the base directory or below it)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum)]
    pub output: Option<CliOutputFormat>,

    /// File name pattern selecting config files (can be repeated)
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Vec<String>,

    /// Do not report keys defined twice within one directory
    #[arg(long)]
    pub no_collisions: bool,

    /// Exit with an error if any file failed to load
    #[arg(long)]
    pub strict: bool,

    /// Print the resolved directory chain instead of merging
    #[arg(long)]
    pub print_chain: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Print an example config file
    #[arg(long)]
    pub example_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Output format for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliOutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the base directory.
    ///
    /// Returns the provided path or the current directory.
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the target directories.
    ///
    /// Defaults to the base directory itself when no target is given.
    pub fn targets(&self) -> Vec<PathBuf> {
        if self.targets.is_empty() {
            vec![self.base_dir()]
        } else {
            self.targets.clone()
        }
    }

    /// Apply command-line overrides on top of the loaded tool config.
    pub fn apply_to(&self, config: &mut Config) {
        if !self.pattern.is_empty() {
            config.sources.patterns = self.pattern.clone();
        }
        if self.no_collisions {
            config.merge.report_collisions = Some(false);
        }
        if let Some(format) = self.output {
            config.output.format = Some(format.into());
        }
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "hcm", &mut std::io::stdout());
    }
}
