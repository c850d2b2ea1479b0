//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub seed: u64,
    pub projects: usize,
    pub reference_time: Option<String>,
    pub output_dir: String,
    pub log_level: String,
    pub log_format: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`; `None` shows the defaults.
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
