//! Generation run projection types for operator-facing adapters.
//!
//! Defines request and response types for a dataset generation run.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::port::outbound::sink::Artifact;

/// Run configuration and overrides from CLI flags.
///
/// Overrides take precedence over the configuration file, which takes
/// precedence over built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content, if a config file was found.
    pub config_toml: Option<String>,

    /// Override for the random seed.
    pub seed: Option<u64>,

    /// Override for the number of projects.
    pub projects: Option<usize>,

    /// Override for the output directory.
    pub output_dir: Option<String>,

    /// Override for the pinned reference time.
    pub reference_time: Option<NaiveDateTime>,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,
}

/// Resolved settings shown before a run starts.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub seed: u64,
    pub projects: usize,
    pub output_dir: String,
    /// Pinned reference time, or `None` for the wall clock.
    pub reference_time: Option<NaiveDateTime>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub projects: usize,
    pub performance_metrics: usize,
    pub cost_rows: usize,
    pub recommendations: usize,
    /// Provider catalog labels.
    pub providers: Vec<String>,
    /// Strategy catalog labels.
    pub strategies: Vec<String>,
    /// Mean estimated project cost.
    pub average_cost: Option<f64>,
    /// Directory the artifacts were written to.
    pub output_dir: String,
    pub artifacts: Vec<Artifact>,
}

/// Generation use-cases for operator-facing adapters.
pub trait RuntimeOperator: Send + Sync {
    /// Resolve configuration and overrides without generating anything.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Generate the dataset and write every artifact.
    fn execute_run(&self, request: &RunRequest) -> Result<RunReport>;
}
