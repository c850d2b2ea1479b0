//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

/// Project counts above this produce metric tables large enough to mention.
const LARGE_PROJECT_COUNT: usize = 10_000;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView> {
        let config = config::settings::Config::parse_toml(config_toml.unwrap_or_default())?;

        Ok(ConfigView {
            seed: config.generator.seed,
            projects: config.generator.projects,
            reference_time: config.generator.reference_time,
            output_dir: config.output.directory,
            log_level: config.logging.level,
            log_format: config.logging.format,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = config::settings::Config::parse_document(config_toml)?;
        let mut warnings = Vec::new();

        if config.generator.reference_time.is_none() {
            warnings.push(
                "reference_time not set; output depends on the current date".to_string(),
            );
        }

        if config.generator.projects > LARGE_PROJECT_COUNT {
            warnings.push(format!(
                "{} projects will produce a very large performance_metrics.csv",
                config.generator.projects
            ));
        }

        if std::path::Path::new(&config.output.directory).is_file() {
            warnings.push(format!(
                "output directory '{}' exists as a file",
                config.output.directory
            ));
        }

        Ok(ConfigValidationReport { warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_without_file_reports_defaults() {
        let view = Operator::new().show_config(None).unwrap();
        assert_eq!(view.log_format, "pretty");
        assert!(view.reference_time.is_none());
    }

    #[test]
    fn validation_reports_file_errors() {
        let err = Operator::new()
            .validate_config("[generator]\nprojects = 0\n")
            .unwrap_err();
        assert!(err.to_string().contains("projects"));
    }

    #[test]
    fn unpinned_reference_time_is_a_warning() {
        let report = Operator::new()
            .validate_config("[generator]\nprojects = 4\n")
            .unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("reference_time")));
    }

    #[test]
    fn pinned_config_without_issues_has_no_warnings() {
        let toml = "[generator]\nprojects = 4\nreference_time = \"2026-01-01\"\n\n[output]\ndirectory = \"target/cloudshift-validate\"\n";
        let report = Operator::new().validate_config(toml).unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }
}
