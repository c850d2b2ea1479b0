//! Threshold rules that turn performance and cost tables into advice.

use crate::domain::metric::PerformanceMetric;
use crate::domain::project::MigrationProject;
use crate::domain::recommendation::{Recommendation, EXPENSIVE_PERCENTILE};
use crate::domain::stats::quantile;

use super::sampler::Sampler;

const LATENCY_SAVINGS_USD: (f64, f64) = (1_000.0, 5_000.0);
const ERROR_RATE_SAVINGS_USD: (f64, f64) = (2_000.0, 8_000.0);

/// Apply the latency, error-rate and cost rules in that order.
pub(crate) fn generate(
    sampler: &mut Sampler,
    projects: &[MigrationProject],
    metrics: &[PerformanceMetric],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for project_id in flagged_projects(metrics, PerformanceMetric::has_high_latency) {
        let savings = sampler.uniform(LATENCY_SAVINGS_USD.0..LATENCY_SAVINGS_USD.1);
        recommendations.push(Recommendation::high_latency(project_id, savings));
    }

    for project_id in flagged_projects(metrics, PerformanceMetric::has_high_error_rate) {
        let savings = sampler.uniform(ERROR_RATE_SAVINGS_USD.0..ERROR_RATE_SAVINGS_USD.1);
        recommendations.push(Recommendation::high_error_rate(project_id, savings));
    }

    let costs: Vec<f64> = projects.iter().map(|p| p.estimated_cost_usd).collect();
    if let Some(threshold) = quantile(&costs, EXPENSIVE_PERCENTILE) {
        recommendations.extend(
            projects
                .iter()
                .filter(|p| p.estimated_cost_usd > threshold)
                .map(|p| {
                    Recommendation::high_cost(
                        p.project_id.as_str(),
                        p.migration_strategy,
                        p.estimated_cost_usd,
                    )
                }),
        );
    }

    recommendations
}

/// Distinct project ids with at least one matching row, in first-seen order.
fn flagged_projects<'a, F>(metrics: &'a [PerformanceMetric], flagged: F) -> Vec<&'a str>
where
    F: Fn(&PerformanceMetric) -> bool,
{
    let mut ids: Vec<&str> = Vec::new();
    for row in metrics.iter().filter(|row| flagged(*row)) {
        if !ids.contains(&row.project_id.as_str()) {
            ids.push(row.project_id.as_str());
        }
    }
    ids
}
