//! Hand-built records for rule and aggregation tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use cloudshift::domain::metric::{daily_volume_gb, PerformanceMetric};
use cloudshift::domain::project::{
    BusinessUnit, DataType, MigrationProject, MigrationStrategy, ProjectStatus,
};
use cloudshift::domain::provider::CloudProvider;

/// Fixed "now" shared by deterministic tests.
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A completed 30-day project with the given ordinal and cost.
pub fn project(ordinal: usize, estimated_cost_usd: f64) -> MigrationProject {
    let start = reference_time() - Duration::days(60);
    MigrationProject {
        project_id: MigrationProject::id_for(ordinal),
        project_name: MigrationProject::name_for(ordinal),
        source_cloud: CloudProvider::Aws,
        target_cloud: CloudProvider::Gcp,
        data_type: DataType::Analytical,
        data_size_gb: 2_500.0,
        complexity_score: 5.0,
        migration_strategy: MigrationStrategy::Replatform,
        start_date: start,
        end_date: start + Duration::days(30),
        estimated_cost_usd,
        status: ProjectStatus::Completed,
        team_size: 6,
        business_unit: BusinessUnit::Operations,
    }
}

/// A healthy metric row for `project_id`.
pub fn metric(project_id: &str) -> PerformanceMetric {
    PerformanceMetric {
        project_id: project_id.to_string(),
        date: reference_time().date(),
        throughput_gbps: 2.0,
        latency_ms: 80.0,
        error_rate: 0.01,
        daily_cost_usd: 1_200.0,
        data_transferred_gb: daily_volume_gb(2.0),
        cpu_utilization: 55.0,
        memory_utilization: 60.0,
    }
}
