//! Runtime operator implementation.

use tracing::info;

use crate::adapter::outbound::filesystem::directory::DirectorySink;
use crate::application::generator::engine::Generator;
use crate::domain::project::MigrationStrategy;
use crate::domain::provider::CloudProvider;
use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::runtime::{
    RunReport, RunRequest, RunStartupSnapshot, RuntimeOperator,
};
use crate::port::outbound::sink::DatasetSink;

use super::entry::Operator;

impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = self.load_run_config(request)?;
        let settings = config.generator_settings()?;

        Ok(RunStartupSnapshot {
            seed: settings.seed,
            projects: settings.projects,
            output_dir: config.output.directory,
            reference_time: settings.reference_time,
        })
    }

    fn execute_run(&self, request: &RunRequest) -> Result<RunReport> {
        let config = self.load_run_config(request)?;
        config.init_logging();

        let settings = config.generator_settings()?;
        info!(
            seed = settings.seed,
            projects = settings.projects,
            output_dir = %config.output.directory,
            "cloudshift starting"
        );

        let mut generator = Generator::new(&settings);
        let dataset = generator.generate_dataset(settings.projects)?;

        let sink = DirectorySink::new(&config.output.directory);
        let persisted = sink.persist(&dataset)?;

        info!(
            projects = dataset.projects.len(),
            recommendations = dataset.recommendations.len(),
            "cloudshift finished"
        );

        Ok(RunReport {
            projects: dataset.projects.len(),
            performance_metrics: dataset.performance.len(),
            cost_rows: dataset.costs.len(),
            recommendations: dataset.recommendations.len(),
            providers: CloudProvider::ALL
                .iter()
                .map(|provider| provider.label().to_string())
                .collect(),
            strategies: MigrationStrategy::ALL
                .iter()
                .map(|strategy| strategy.label().to_string())
                .collect(),
            average_cost: dataset.average_cost(),
            output_dir: persisted.destination,
            artifacts: persisted.artifacts,
        })
    }
}

impl Operator {
    fn load_run_config(&self, request: &RunRequest) -> Result<config::settings::Config> {
        let mut config =
            config::settings::Config::from_toml(request.config_toml.as_deref().unwrap_or(""))?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Self::apply_run_overrides(&mut config, request);
        config.validate()?;
        Ok(config)
    }

    fn apply_run_overrides(config: &mut config::settings::Config, request: &RunRequest) {
        if let Some(seed) = request.seed {
            config.generator.seed = seed;
        }

        if let Some(projects) = request.projects {
            config.generator.projects = projects;
        }

        if let Some(ref output_dir) = request.output_dir {
            config.output.directory = output_dir.clone();
        }

        if let Some(reference_time) = request.reference_time {
            config.generator.reference_time =
                Some(reference_time.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
        }

        if let Some(ref log_level) = request.log_level {
            config.logging.level = log_level.clone();
        }

        if request.json_logs {
            config.logging.format = "json".to_string();
        }
    }
}
