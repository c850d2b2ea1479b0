//! Command-line interface definitions.
//!
//! Defines the CLI structure for cloudshift using `clap`. Running the binary
//! without a subcommand behaves like `cloudshift generate` with defaults.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use super::paths;
use crate::application::generator::settings::parse_reference_time;

/// Synthetic multi-cloud migration dataset generator
#[derive(Parser, Debug)]
#[command(name = "cloudshift")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the cloudshift CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the dataset and write it to the output directory (default)
    Generate(GenerateArgs),

    /// Show the cloud provider catalog
    Catalog,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `cloudshift config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = paths::DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to configuration file (optional when left at the default)
    #[arg(short, long, default_value = paths::DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of projects
    #[arg(short = 'n', long)]
    pub projects: Option<usize>,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Pin "now" (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS) for reproducible output
    #[arg(long, value_parser = parse_reference_time)]
    pub reference_time: Option<NaiveDateTime>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(paths::DEFAULT_CONFIG),
            seed: None,
            projects: None,
            output_dir: None,
            reference_time: None,
            log_level: None,
            json_logs: false,
        }
    }
}
