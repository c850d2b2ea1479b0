//! Daily performance telemetry.

use chrono::NaiveDate;
use serde::Serialize;

/// Latency above which a project is flagged for network tuning.
pub const HIGH_LATENCY_MS: f64 = 200.0;

/// Error rate above which a project is flagged for reliability work.
pub const HIGH_ERROR_RATE: f64 = 0.05;

/// One day of simulated operational telemetry for an active project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetric {
    pub project_id: String,
    pub date: NaiveDate,
    pub throughput_gbps: f64,
    pub latency_ms: f64,
    pub error_rate: f64,
    pub daily_cost_usd: f64,
    pub data_transferred_gb: f64,
    pub cpu_utilization: f64,
    pub memory_utilization: f64,
}

impl PerformanceMetric {
    #[must_use]
    pub fn has_high_latency(&self) -> bool {
        self.latency_ms > HIGH_LATENCY_MS
    }

    #[must_use]
    pub fn has_high_error_rate(&self) -> bool {
        self.error_rate > HIGH_ERROR_RATE
    }
}

/// Convert a sustained rate in gigabits per second into gigabytes per day.
#[must_use]
pub fn daily_volume_gb(throughput_gbps: f64) -> f64 {
    throughput_gbps * 24.0 * 3600.0 / 8.0
}
