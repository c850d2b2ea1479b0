//! Per-project cost breakdown.

use serde::Serialize;

use super::provider::CloudProvider;

/// Nominal share of total cost per category, in output column order:
/// compute, storage, network, tools, personnel.
pub const CATEGORY_SHARES: [f64; 5] = [0.40, 0.25, 0.15, 0.10, 0.10];

/// Categorical split of a project's estimated cost.
///
/// Each category is perturbed independently after the split, so the sum
/// does not reconcile to the project total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub project_id: String,
    pub compute_cost: f64,
    pub storage_cost: f64,
    pub network_cost: f64,
    pub tools_cost: f64,
    pub personnel_cost: f64,
    pub source_cloud: CloudProvider,
    pub target_cloud: CloudProvider,
    pub data_size_gb: f64,
}

impl CostBreakdown {
    /// Category values in column order.
    #[must_use]
    pub fn categories(&self) -> [f64; 5] {
        [
            self.compute_cost,
            self.storage_cost,
            self.network_cost,
            self.tools_cost,
            self.personnel_cost,
        ]
    }
}
