//! The dataset generator.
//!
//! Owns one seeded random stream and one "now" reference. Every table is
//! drawn from that stream in a fixed order, so a generator built from the
//! same settings always yields the same dataset:
//!
//! ```text
//! projects ─┬─> performance metrics ─┐
//!           ├─> cost breakdown       │
//!           ├─> pattern analysis     │
//!           └────────────────────────┴─> recommendations
//! ```

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::domain::analysis::PatternAnalysis;
use crate::domain::cost::CostBreakdown;
use crate::domain::dataset::Dataset;
use crate::domain::error::GenerationError;
use crate::domain::metric::PerformanceMetric;
use crate::domain::project::MigrationProject;
use crate::domain::recommendation::Recommendation;

use super::sampler::Sampler;
use super::settings::GeneratorSettings;
use super::{cost, metric, project, recommendation};

/// Synthetic multi-cloud migration dataset generator.
#[derive(Debug, Clone)]
pub struct Generator {
    sampler: Sampler,
    now: NaiveDateTime,
}

impl Generator {
    /// Build a generator from settings, reading the local clock unless
    /// the settings pin a reference time.
    #[must_use]
    pub fn new(settings: &GeneratorSettings) -> Self {
        let now = settings
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local());
        Self::at(settings.seed, now)
    }

    /// Build a generator with an explicit seed and "now".
    #[must_use]
    pub fn at(seed: u64, now: NaiveDateTime) -> Self {
        debug!(seed, now = %now, "Generator seeded");
        Self {
            sampler: Sampler::seeded(seed),
            now,
        }
    }

    /// Reference time used to clip performance windows and place start dates.
    #[must_use]
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Generate the project table.
    pub fn generate_projects(
        &mut self,
        count: usize,
    ) -> Result<Vec<MigrationProject>, GenerationError> {
        project::generate(&mut self.sampler, self.now, count)
    }

    /// Generate daily metrics for in-progress and completed projects.
    pub fn generate_performance_metrics(
        &mut self,
        projects: &[MigrationProject],
    ) -> Result<Vec<PerformanceMetric>, GenerationError> {
        metric::generate(&mut self.sampler, self.now, projects)
    }

    /// Generate one cost breakdown row per project.
    pub fn generate_cost_breakdown(
        &mut self,
        projects: &[MigrationProject],
    ) -> Result<Vec<CostBreakdown>, GenerationError> {
        cost::generate(&mut self.sampler, projects)
    }

    /// Summarize the project table. Consumes no randomness.
    #[must_use]
    pub fn analyze_patterns(&self, projects: &[MigrationProject]) -> PatternAnalysis {
        PatternAnalysis::from_projects(projects)
    }

    /// Apply the recommendation rules to the project and metric tables.
    pub fn generate_recommendations(
        &mut self,
        projects: &[MigrationProject],
        metrics: &[PerformanceMetric],
    ) -> Vec<Recommendation> {
        recommendation::generate(&mut self.sampler, projects, metrics)
    }

    /// Run the full pipeline for `count` projects.
    pub fn generate_dataset(&mut self, count: usize) -> Result<Dataset, GenerationError> {
        info!(count, "Generating migration projects");
        let projects = self.generate_projects(count)?;

        let performance = self.generate_performance_metrics(&projects)?;
        info!(records = performance.len(), "Generated performance metrics");

        let costs = self.generate_cost_breakdown(&projects)?;
        info!(records = costs.len(), "Generated cost analysis");

        let analysis = self.analyze_patterns(&projects);
        debug!(
            tallied = analysis.status_distribution.total(),
            statuses = analysis.status_distribution.len(),
            strategies = analysis.migration_strategies.len(),
            "Analyzed migration patterns"
        );

        let recommendations = self.generate_recommendations(&projects, &performance);
        info!(records = recommendations.len(), "Generated recommendations");

        Ok(Dataset {
            projects,
            performance,
            costs,
            analysis,
            recommendations,
        })
    }
}
