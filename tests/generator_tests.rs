//! End-to-end properties of a generated dataset.

mod support;

use std::collections::HashSet;

use chrono::Duration;
use cloudshift::adapter::outbound::filesystem::csv::encode;
use cloudshift::application::generator::engine::Generator;
use cloudshift::application::generator::settings::GeneratorSettings;
use cloudshift::domain::dataset::Dataset;
use cloudshift::domain::error::GenerationError;
use cloudshift::domain::project::ProjectStatus;

use support::fixture::reference_time;

fn dataset(seed: u64, count: usize) -> Dataset {
    Generator::at(seed, reference_time())
        .generate_dataset(count)
        .unwrap()
}

#[test]
fn same_seed_and_reference_time_produce_identical_bytes() {
    let first = dataset(42, 25);
    let second = dataset(42, 25);

    assert_eq!(first, second);
    assert_eq!(encode(&first.projects), encode(&second.projects));
    assert_eq!(encode(&first.performance), encode(&second.performance));
    assert_eq!(
        encode(&first.recommendations),
        encode(&second.recommendations)
    );
}

#[test]
fn settings_with_pinned_time_match_explicit_generator() {
    let settings = GeneratorSettings::new(7, 10, Some(reference_time())).unwrap();
    let from_settings = Generator::new(&settings).generate_dataset(10).unwrap();

    assert_eq!(from_settings, dataset(7, 10));
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(dataset(1, 10).projects, dataset(2, 10).projects);
}

#[test]
fn project_rows_respect_field_ranges() {
    let data = dataset(42, 200);
    let now = reference_time();

    assert_eq!(data.projects.len(), 200);
    for (index, project) in data.projects.iter().enumerate() {
        assert_eq!(project.project_id, format!("MIG_{:03}", index + 1));
        assert_eq!(
            project.project_name,
            format!("Migration Project {}", index + 1)
        );
        assert_ne!(project.source_cloud, project.target_cloud);
        assert!(project.data_size_gb > 0.0);
        assert!((1.0..=10.0).contains(&project.complexity_score));
        assert!((3..=11).contains(&project.team_size));
        assert!(project.start_date <= now);
        assert!(project.start_date > now - Duration::days(180));
        assert!(project.end_date >= project.start_date);
        assert!(project.estimated_cost_usd > 0.0);
    }
}

#[test]
fn metric_rows_cover_each_active_day() {
    let data = dataset(42, 60);
    let now = reference_time();

    let expected: i64 = data.projects.iter().map(|p| p.active_days(now)).sum();
    assert_eq!(data.performance.len() as i64, expected);

    let reporting: HashSet<_> = data
        .projects
        .iter()
        .filter(|p| p.status.reports_metrics())
        .map(|p| p.project_id.as_str())
        .collect();
    for row in &data.performance {
        assert!(reporting.contains(row.project_id.as_str()));
        assert!(row.throughput_gbps >= 0.1);
        assert!(row.latency_ms >= 10.0);
        assert!(row.error_rate >= 0.0);
        assert!((40.0..=85.0).contains(&row.cpu_utilization));
        assert!((50.0..=90.0).contains(&row.memory_utilization));
    }
}

#[test]
fn metric_dates_never_pass_the_reference_time() {
    let data = dataset(3, 40);
    let today = reference_time().date();

    assert!(data.performance.iter().all(|row| row.date <= today));
}

#[test]
fn planning_and_on_hold_projects_have_no_metrics() {
    let data = dataset(11, 80);
    let silent: HashSet<_> = data
        .projects
        .iter()
        .filter(|p| matches!(p.status, ProjectStatus::Planning | ProjectStatus::OnHold))
        .map(|p| p.project_id.as_str())
        .collect();

    assert!(data
        .performance
        .iter()
        .all(|row| !silent.contains(row.project_id.as_str())));
}

#[test]
fn cost_rows_align_with_projects() {
    let data = dataset(42, 30);

    assert_eq!(data.costs.len(), data.projects.len());
    for (cost, project) in data.costs.iter().zip(&data.projects) {
        assert_eq!(cost.project_id, project.project_id);
        assert_eq!(cost.source_cloud, project.source_cloud);
        assert_eq!(cost.target_cloud, project.target_cloud);
        assert_eq!(cost.data_size_gb, project.data_size_gb);
        assert!(cost.categories().iter().all(|c| *c >= 0.0));
    }
}

#[test]
fn analysis_counts_sum_to_project_count() {
    let data = dataset(42, 25);
    let analysis = &data.analysis;

    assert_eq!(analysis.cloud_preferences.source_distribution.total(), 25);
    assert_eq!(analysis.cloud_preferences.target_distribution.total(), 25);
    assert_eq!(analysis.migration_strategies.total(), 25);
    assert_eq!(analysis.data_types.total(), 25);
    assert_eq!(analysis.status_distribution.total(), 25);

    let mean_cost =
        data.projects.iter().map(|p| p.estimated_cost_usd).sum::<f64>() / 25.0;
    let reported = data.average_cost().unwrap();
    assert!((reported - mean_cost).abs() < 1e-6);
}

#[test]
fn zero_projects_is_rejected() {
    let err = Generator::at(42, reference_time())
        .generate_dataset(0)
        .unwrap_err();
    assert_eq!(err, GenerationError::EmptyProjectCount);
}

#[test]
fn single_project_dataset_is_complete() {
    let data = dataset(5, 1);

    assert_eq!(data.projects.len(), 1);
    assert_eq!(data.costs.len(), 1);
    assert_eq!(data.analysis.status_distribution.total(), 1);
}
