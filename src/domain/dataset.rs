//! The bundle of tables produced by one generation run.

use super::analysis::PatternAnalysis;
use super::cost::CostBreakdown;
use super::metric::PerformanceMetric;
use super::project::MigrationProject;
use super::recommendation::Recommendation;

/// All tables and the summary produced from a single random stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub projects: Vec<MigrationProject>,
    pub performance: Vec<PerformanceMetric>,
    pub costs: Vec<CostBreakdown>,
    pub analysis: PatternAnalysis,
    pub recommendations: Vec<Recommendation>,
}

impl Dataset {
    /// Mean estimated project cost, if there are any projects.
    #[must_use]
    pub fn average_cost(&self) -> Option<f64> {
        self.analysis.average_metrics.avg_cost_usd
    }
}
