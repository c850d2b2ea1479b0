//! Flat CSV encoding for the dataset tables.
//!
//! Every table gets a header row, even when it has no records. Floats use
//! the shortest representation that round-trips, with a trailing `.0` on
//! integral values so numeric columns read back as floats.

use chrono::NaiveDateTime;

use crate::domain::cost::CostBreakdown;
use crate::domain::metric::PerformanceMetric;
use crate::domain::project::MigrationProject;
use crate::domain::recommendation::Recommendation;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A record that can be written as one CSV row.
pub trait CsvRecord {
    /// Column names, in field order.
    const HEADER: &'static [&'static str];

    /// Unescaped field values, in column order.
    fn fields(&self) -> Vec<String>;
}

/// Encode a header row followed by one row per record.
#[must_use]
pub fn encode<T: CsvRecord>(rows: &[T]) -> String {
    let mut csv = join_row(T::HEADER.iter().map(|h| (*h).to_string()));
    for row in rows {
        csv.push_str(&join_row(row.fields()));
    }
    csv
}

fn join_row<I: IntoIterator<Item = String>>(fields: I) -> String {
    let mut line = fields
        .into_iter()
        .map(|field| escape(&field))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Quote a field if it contains a delimiter, quote or line break.
#[must_use]
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Format a float for CSV output.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

impl CsvRecord for MigrationProject {
    const HEADER: &'static [&'static str] = &[
        "project_id",
        "project_name",
        "source_cloud",
        "target_cloud",
        "data_type",
        "data_size_gb",
        "complexity_score",
        "migration_strategy",
        "start_date",
        "end_date",
        "estimated_cost_usd",
        "status",
        "team_size",
        "business_unit",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.project_id.clone(),
            self.project_name.clone(),
            self.source_cloud.to_string(),
            self.target_cloud.to_string(),
            self.data_type.to_string(),
            format_float(self.data_size_gb),
            format_float(self.complexity_score),
            self.migration_strategy.to_string(),
            format_timestamp(&self.start_date),
            format_timestamp(&self.end_date),
            format_float(self.estimated_cost_usd),
            self.status.to_string(),
            self.team_size.to_string(),
            self.business_unit.to_string(),
        ]
    }
}

impl CsvRecord for PerformanceMetric {
    const HEADER: &'static [&'static str] = &[
        "project_id",
        "date",
        "throughput_gbps",
        "latency_ms",
        "error_rate",
        "daily_cost_usd",
        "data_transferred_gb",
        "cpu_utilization",
        "memory_utilization",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.project_id.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            format_float(self.throughput_gbps),
            format_float(self.latency_ms),
            format_float(self.error_rate),
            format_float(self.daily_cost_usd),
            format_float(self.data_transferred_gb),
            format_float(self.cpu_utilization),
            format_float(self.memory_utilization),
        ]
    }
}

impl CsvRecord for CostBreakdown {
    const HEADER: &'static [&'static str] = &[
        "project_id",
        "compute_cost",
        "storage_cost",
        "network_cost",
        "tools_cost",
        "personnel_cost",
        "source_cloud",
        "target_cloud",
        "data_size_gb",
    ];

    fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.project_id.clone()];
        fields.extend(self.categories().into_iter().map(format_float));
        fields.extend([
            self.source_cloud.to_string(),
            self.target_cloud.to_string(),
            format_float(self.data_size_gb),
        ]);
        fields
    }
}

impl CsvRecord for Recommendation {
    const HEADER: &'static [&'static str] = &[
        "project_id",
        "type",
        "issue",
        "recommendation",
        "priority",
        "estimated_savings_usd",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.project_id.clone(),
            self.kind.to_string(),
            self.issue.to_string(),
            self.recommendation.clone(),
            self.priority.to_string(),
            format_float(self.estimated_savings_usd),
        ]
    }
}
