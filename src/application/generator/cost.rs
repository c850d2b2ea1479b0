//! Cost breakdown generation.

use crate::domain::cost::{CostBreakdown, CATEGORY_SHARES};
use crate::domain::error::GenerationError;
use crate::domain::project::MigrationProject;
use crate::domain::stats::round_to;

use super::sampler::Sampler;

const CATEGORY_NOISE: (f64, f64) = (1.0, 0.1);

/// One breakdown row per project.
pub(crate) fn generate(
    sampler: &mut Sampler,
    projects: &[MigrationProject],
) -> Result<Vec<CostBreakdown>, GenerationError> {
    projects
        .iter()
        .map(|project| {
            let total = project.estimated_cost_usd;
            let mut categories = [0.0; 5];
            for (value, share) in categories.iter_mut().zip(CATEGORY_SHARES) {
                let noise = sampler.normal(CATEGORY_NOISE.0, CATEGORY_NOISE.1)?;
                *value = round_to((total * share * noise).max(0.0), 2);
            }
            let [compute_cost, storage_cost, network_cost, tools_cost, personnel_cost] = categories;

            Ok(CostBreakdown {
                project_id: project.project_id.clone(),
                compute_cost,
                storage_cost,
                network_cost,
                tools_cost,
                personnel_cost,
                source_cloud: project.source_cloud,
                target_cloud: project.target_cloud,
                data_size_gb: project.data_size_gb,
            })
        })
        .collect()
}
