//! Project table generation.

use chrono::{Duration, NaiveDateTime};

use crate::domain::error::GenerationError;
use crate::domain::project::{
    BusinessUnit, DataType, MigrationProject, MigrationStrategy, ProjectStatus,
};
use crate::domain::provider::CloudProvider;
use crate::domain::stats::round_to;

use super::sampler::Sampler;
use super::weighted::WeightedChoice;

/// Log-normal `(mu, sigma)` for data volume in GB.
const DATA_SIZE_LOG_NORMAL: (f64, f64) = (8.0, 2.0);

/// Complexity score range.
const COMPLEXITY_RANGE: (f64, f64) = (1.0, 10.0);

/// Shortest expected timeline in days.
const MIN_EXPECTED_DAYS: f64 = 30.0;

/// Relative spread of the actual timeline around the expected one.
const DURATION_SPREAD: f64 = 0.2;

/// Start dates fall within this many days before "now".
const START_WINDOW_DAYS: i64 = 180;

/// Team size range, upper bound exclusive.
const TEAM_SIZE_RANGE: (u32, u32) = (3, 12);

const STATUS_WEIGHTS: [(ProjectStatus, f64); 4] = [
    (ProjectStatus::Planning, 0.2),
    (ProjectStatus::InProgress, 0.4),
    (ProjectStatus::Completed, 0.3),
    (ProjectStatus::OnHold, 0.1),
];

/// Expected timeline in days from size and complexity.
#[must_use]
pub fn expected_duration_days(data_size_gb: f64, complexity: f64) -> f64 {
    MIN_EXPECTED_DAYS.max(data_size_gb / 100.0 + complexity * 5.0)
}

/// Estimated cost in USD, scaled by the mean provider cost factor.
#[must_use]
pub fn estimated_cost(
    data_size_gb: f64,
    complexity: f64,
    source: CloudProvider,
    target: CloudProvider,
) -> f64 {
    let base_cost = data_size_gb * 10.0 + complexity * 1000.0;
    base_cost * (source.cost_factor() + target.cost_factor()) / 2.0
}

/// Generate `count` projects relative to `now`.
pub(crate) fn generate(
    sampler: &mut Sampler,
    now: NaiveDateTime,
    count: usize,
) -> Result<Vec<MigrationProject>, GenerationError> {
    if count == 0 {
        return Err(GenerationError::EmptyProjectCount);
    }

    let statuses = WeightedChoice::new(&STATUS_WEIGHTS)?;
    (1..=count)
        .map(|ordinal| generate_one(sampler, &statuses, now, ordinal))
        .collect()
}

fn generate_one(
    sampler: &mut Sampler,
    statuses: &WeightedChoice<ProjectStatus>,
    now: NaiveDateTime,
    ordinal: usize,
) -> Result<MigrationProject, GenerationError> {
    let source_cloud = sampler.choose("cloud providers", CloudProvider::ALL)?;
    let target_cloud = sampler.choose("cloud providers", &source_cloud.alternatives())?;

    let (mu, sigma) = DATA_SIZE_LOG_NORMAL;
    let data_size_gb = sampler.log_normal(mu, sigma)?;
    let complexity = sampler.uniform(COMPLEXITY_RANGE.0..COMPLEXITY_RANGE.1);

    let base_days = expected_duration_days(data_size_gb, complexity);
    let sampled_days = sampler.normal(base_days, base_days * DURATION_SPREAD)?;
    let migration_days = (sampled_days.trunc() as i64).max(0);

    let start_offset = sampler.uniform(0..START_WINDOW_DAYS);
    let start_date = now - Duration::days(start_offset);
    let end_date = Duration::try_days(migration_days)
        .and_then(|span| start_date.checked_add_signed(span))
        .ok_or_else(|| GenerationError::InvalidDistribution {
            distribution: "normal",
            reason: format!("timeline of {migration_days} days overflows the calendar"),
        })?;

    let cost = estimated_cost(data_size_gb, complexity, source_cloud, target_cloud);

    Ok(MigrationProject {
        project_id: MigrationProject::id_for(ordinal),
        project_name: MigrationProject::name_for(ordinal),
        source_cloud,
        target_cloud,
        data_type: sampler.choose("data types", DataType::ALL)?,
        data_size_gb: round_to(data_size_gb, 2),
        complexity_score: round_to(complexity, 1),
        migration_strategy: sampler.choose("migration strategies", MigrationStrategy::ALL)?,
        start_date,
        end_date,
        estimated_cost_usd: round_to(cost, 2),
        status: sampler.weighted(statuses),
        team_size: sampler.uniform(TEAM_SIZE_RANGE.0..TEAM_SIZE_RANGE.1),
        business_unit: sampler.choose("business units", BusinessUnit::ALL)?,
    })
}
