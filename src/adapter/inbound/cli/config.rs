//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(path)?;
    let from_file = config_toml.is_some();
    let config = operator::operator().show_config(config_toml.as_deref())?;

    if output::is_json() {
        let source = if from_file {
            path.display().to_string()
        } else {
            "defaults".to_string()
        };
        output::json_output(json!({
            "type": "config",
            "payload": {
                "source": source,
                "generator": {
                    "seed": config.seed,
                    "projects": config.projects,
                    "reference_time": config.reference_time,
                },
                "output": { "directory": config.output_dir },
                "logging": { "level": config.log_level, "format": config.log_format },
            }
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if from_file {
        output::field("Source", path.display());
    } else {
        output::field("Source", output::muted("defaults (no config file)"));
    }

    output::section("Generator");
    output::field("Seed", config.seed);
    output::field("Projects", config.projects);
    output::field(
        "Reference time",
        config
            .reference_time
            .unwrap_or_else(|| "local clock".to_string()),
    );

    output::section("Output");
    output::field("Directory", config.output_dir);

    output::section("Logging");
    output::field("Level", config.log_level);
    output::field("Format", config.log_format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;
    let validation = operator::operator().validate_config(&config_toml)?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("cloudshift config show -c {}", path.display()),
    );

    Ok(())
}
