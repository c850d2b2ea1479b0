//! Destination port for finished datasets.

use crate::domain::dataset::Dataset;
use crate::error::Result;

/// One artifact written by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name (e.g. `migration_projects.csv`).
    pub name: &'static str,
    /// Where the artifact ended up, as displayed to the operator.
    pub location: String,
    /// Number of records it holds.
    pub records: usize,
}

/// Summary of a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReport {
    /// Destination the sink wrote to.
    pub destination: String,
    /// Artifacts in the order they were written.
    pub artifacts: Vec<Artifact>,
}

/// Writes every table and the analysis of a dataset.
///
/// Artifacts are written sequentially; a failure part-way leaves the
/// earlier artifacts in place.
pub trait DatasetSink {
    /// Persist the dataset and report what was written.
    fn persist(&self, dataset: &Dataset) -> Result<PersistReport>;
}
