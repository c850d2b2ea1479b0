//! Daily performance telemetry generation.

use chrono::{Duration, NaiveDateTime};

use crate::domain::error::GenerationError;
use crate::domain::metric::{daily_volume_gb, PerformanceMetric};
use crate::domain::project::MigrationProject;
use crate::domain::stats::round_to;

use super::sampler::Sampler;

const THROUGHPUT_GBPS: (f64, f64) = (2.5, 0.8);
const MIN_THROUGHPUT_GBPS: f64 = 0.1;
const LATENCY_MS: (f64, f64) = (150.0, 50.0);
const MIN_LATENCY_MS: f64 = 10.0;
const ERROR_RATE: (f64, f64) = (0.02, 0.01);
const DAILY_COST_NOISE: (f64, f64) = (1.0, 0.15);
const CPU_RANGE: (f64, f64) = (40.0, 85.0);
const MEMORY_RANGE: (f64, f64) = (50.0, 90.0);

/// One row per day from start through `min(end, now)` for every project
/// that reports metrics.
pub(crate) fn generate(
    sampler: &mut Sampler,
    now: NaiveDateTime,
    projects: &[MigrationProject],
) -> Result<Vec<PerformanceMetric>, GenerationError> {
    let mut metrics = Vec::new();

    for project in projects.iter().filter(|p| p.status.reports_metrics()) {
        let last = project.end_date.min(now);
        let daily_cost = project.estimated_cost_usd / project.billable_days() as f64;

        let mut current = project.start_date;
        while current <= last {
            metrics.push(generate_day(sampler, project, current, daily_cost)?);
            current += Duration::days(1);
        }
    }

    Ok(metrics)
}

fn generate_day(
    sampler: &mut Sampler,
    project: &MigrationProject,
    day: NaiveDateTime,
    daily_cost: f64,
) -> Result<PerformanceMetric, GenerationError> {
    let throughput = sampler
        .normal(THROUGHPUT_GBPS.0, THROUGHPUT_GBPS.1)?
        .max(MIN_THROUGHPUT_GBPS);
    let latency = sampler.normal(LATENCY_MS.0, LATENCY_MS.1)?.max(MIN_LATENCY_MS);
    let error_rate = sampler.normal(ERROR_RATE.0, ERROR_RATE.1)?.max(0.0);
    let actual_daily_cost = daily_cost * sampler.normal(DAILY_COST_NOISE.0, DAILY_COST_NOISE.1)?;

    Ok(PerformanceMetric {
        project_id: project.project_id.clone(),
        date: day.date(),
        throughput_gbps: round_to(throughput, 2),
        latency_ms: round_to(latency, 1),
        error_rate: round_to(error_rate, 4),
        daily_cost_usd: round_to(actual_daily_cost, 2),
        data_transferred_gb: round_to(daily_volume_gb(throughput), 2),
        cpu_utilization: round_to(sampler.uniform(CPU_RANGE.0..CPU_RANGE.1), 1),
        memory_utilization: round_to(sampler.uniform(MEMORY_RANGE.0..MEMORY_RANGE.1), 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{BusinessUnit, DataType, MigrationStrategy, ProjectStatus};
    use crate::domain::provider::CloudProvider;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap()
    }

    fn project(id: &str, status: ProjectStatus, days: i64) -> MigrationProject {
        MigrationProject {
            project_id: id.to_string(),
            project_name: "fixture".to_string(),
            source_cloud: CloudProvider::Azure,
            target_cloud: CloudProvider::Aws,
            data_type: DataType::Streaming,
            data_size_gb: 500.0,
            complexity_score: 3.0,
            migration_strategy: MigrationStrategy::Refactor,
            start_date: start(),
            end_date: start() + Duration::days(days),
            estimated_cost_usd: 9_000.0,
            status,
            team_size: 4,
            business_unit: BusinessUnit::Finance,
        }
    }

    #[test]
    fn rows_cover_each_day_until_now() {
        let projects = [project("MIG_001", ProjectStatus::InProgress, 40)];
        let now = start() + Duration::days(9);
        let mut sampler = Sampler::seeded(1);

        let rows = generate(&mut sampler, now, &projects).unwrap();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].date, start().date());
        assert_eq!(rows[9].date, now.date());
    }

    #[test]
    fn same_day_project_emits_one_row_without_dividing_by_zero() {
        let projects = [project("MIG_001", ProjectStatus::Completed, 0)];
        let mut sampler = Sampler::seeded(2);

        let rows = generate(&mut sampler, start() + Duration::days(3), &projects).unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].daily_cost_usd.is_finite());
    }

    #[test]
    fn inactive_projects_emit_nothing() {
        let projects = [
            project("MIG_001", ProjectStatus::Planning, 10),
            project("MIG_002", ProjectStatus::OnHold, 10),
        ];
        let mut sampler = Sampler::seeded(3);
        let rows = generate(&mut sampler, start() + Duration::days(30), &projects).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn magnitudes_respect_floors_and_ranges() {
        let projects = [project("MIG_001", ProjectStatus::Completed, 500)];
        let mut sampler = Sampler::seeded(4);
        let rows = generate(&mut sampler, start() + Duration::days(499), &projects).unwrap();

        assert_eq!(rows.len(), 500);
        for row in &rows {
            assert!(row.throughput_gbps >= MIN_THROUGHPUT_GBPS);
            assert!(row.latency_ms >= MIN_LATENCY_MS);
            assert!(row.error_rate >= 0.0);
            assert!((40.0..=85.0).contains(&row.cpu_utilization));
            assert!((50.0..=90.0).contains(&row.memory_utilization));
            assert!(row.data_transferred_gb > 0.0);
        }
    }
}
