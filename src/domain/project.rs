//! Migration project records and their categorical fields.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::label::labeled_enum;
use super::provider::CloudProvider;

labeled_enum! {
    /// Classification of the data being migrated.
    pub enum DataType {
        Transactional => "transactional",
        Analytical => "analytical",
        Streaming => "streaming",
        Batch => "batch",
        Structured => "structured",
        Unstructured => "unstructured",
        SemiStructured => "semi-structured",
    }
}

labeled_enum! {
    /// Approach taken to move a workload between clouds.
    pub enum MigrationStrategy {
        LiftAndShift => "lift_and_shift",
        Replatform => "replatform",
        Refactor => "refactor",
        Hybrid => "hybrid",
    }
}

labeled_enum! {
    /// Lifecycle status of a project.
    pub enum ProjectStatus {
        Planning => "Planning",
        InProgress => "In Progress",
        Completed => "Completed",
        OnHold => "On Hold",
    }
}

labeled_enum! {
    /// Business unit that owns a project.
    pub enum BusinessUnit {
        Finance => "Finance",
        Marketing => "Marketing",
        Operations => "Operations",
        It => "IT",
        Hr => "HR",
    }
}

impl ProjectStatus {
    /// Whether the project produces daily telemetry.
    #[must_use]
    pub const fn reports_metrics(self) -> bool {
        matches!(self, ProjectStatus::InProgress | ProjectStatus::Completed)
    }
}

/// One synthetic data-migration effort between two cloud providers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationProject {
    pub project_id: String,
    pub project_name: String,
    pub source_cloud: CloudProvider,
    pub target_cloud: CloudProvider,
    pub data_type: DataType,
    pub data_size_gb: f64,
    pub complexity_score: f64,
    pub migration_strategy: MigrationStrategy,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub estimated_cost_usd: f64,
    pub status: ProjectStatus,
    pub team_size: u32,
    pub business_unit: BusinessUnit,
}

impl MigrationProject {
    /// Identifier for the 1-based project ordinal (`MIG_001`).
    #[must_use]
    pub fn id_for(ordinal: usize) -> String {
        format!("MIG_{ordinal:03}")
    }

    /// Display name for the 1-based project ordinal.
    #[must_use]
    pub fn name_for(ordinal: usize) -> String {
        format!("Migration Project {ordinal}")
    }

    /// Whole days between start and end.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Day count used to spread cost across the timeline; never below one.
    #[must_use]
    pub fn billable_days(&self) -> i64 {
        self.duration_days().max(1)
    }

    /// Number of daily metric rows the project yields as of `now`.
    #[must_use]
    pub fn active_days(&self, now: NaiveDateTime) -> i64 {
        if !self.status.reports_metrics() {
            return 0;
        }
        let last = self.end_date.min(now);
        if last < self.start_date {
            return 0;
        }
        (last - self.start_date).num_days() + 1
    }
}
