//! Rule-triggered advisory records.

use serde::Serialize;

use super::label::labeled_enum;
use super::project::MigrationStrategy;

/// Share of a project's estimated cost a cost review is expected to save.
pub const COST_SAVINGS_RATE: f64 = 0.15;

/// Cost percentile above which a project is flagged as expensive.
pub const EXPENSIVE_PERCENTILE: f64 = 0.8;

labeled_enum! {
    /// Area a recommendation addresses.
    pub enum RecommendationKind {
        Performance => "Performance",
        Reliability => "Reliability",
        CostOptimization => "Cost Optimization",
    }
}

labeled_enum! {
    /// Urgency of a recommendation.
    pub enum Priority {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
    }
}

impl RecommendationKind {
    /// Short issue label attached to every recommendation of this kind.
    #[must_use]
    pub const fn issue(self) -> &'static str {
        match self {
            RecommendationKind::Performance => "High Latency",
            RecommendationKind::Reliability => "High Error Rate",
            RecommendationKind::CostOptimization => "High Migration Cost",
        }
    }

    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            RecommendationKind::Performance => Priority::High,
            RecommendationKind::Reliability => Priority::Critical,
            RecommendationKind::CostOptimization => Priority::Medium,
        }
    }
}

/// Advice emitted for a project by one of the threshold rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub project_id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub issue: &'static str,
    pub recommendation: String,
    pub priority: Priority,
    pub estimated_savings_usd: f64,
}

impl Recommendation {
    /// Network tuning advice for a project with latency spikes.
    #[must_use]
    pub fn high_latency(project_id: impl Into<String>, savings: f64) -> Self {
        Self::new(
            project_id,
            RecommendationKind::Performance,
            "Consider optimizing network configuration or using dedicated connections".into(),
            savings,
        )
    }

    /// Error-handling advice for a project with elevated error rates.
    #[must_use]
    pub fn high_error_rate(project_id: impl Into<String>, savings: f64) -> Self {
        Self::new(
            project_id,
            RecommendationKind::Reliability,
            "Implement better error handling and retry mechanisms".into(),
            savings,
        )
    }

    /// Strategy review for an expensive project; savings are a fixed share of cost.
    #[must_use]
    pub fn high_cost(
        project_id: impl Into<String>,
        strategy: MigrationStrategy,
        estimated_cost_usd: f64,
    ) -> Self {
        Self::new(
            project_id,
            RecommendationKind::CostOptimization,
            format!("Consider {strategy} strategy optimization"),
            estimated_cost_usd * COST_SAVINGS_RATE,
        )
    }

    fn new(
        project_id: impl Into<String>,
        kind: RecommendationKind,
        recommendation: String,
        estimated_savings_usd: f64,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            kind,
            issue: kind.issue(),
            recommendation,
            priority: kind.priority(),
            estimated_savings_usd,
        }
    }
}
