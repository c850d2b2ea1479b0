//! Directory-backed dataset sink.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::dataset::Dataset;
use crate::error::{Error, Result};
use crate::port::outbound::sink::{Artifact, DatasetSink, PersistReport};

use super::csv::encode;
use super::json::encode_analysis;

pub const PROJECTS_FILE: &str = "migration_projects.csv";
pub const PERFORMANCE_FILE: &str = "performance_metrics.csv";
pub const COSTS_FILE: &str = "cost_analysis.csv";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.csv";
pub const ANALYSIS_FILE: &str = "migration_analysis.json";

/// Writes each artifact as a file under one directory.
///
/// The directory is created on demand and may already exist; existing
/// artifacts are overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write(&self, name: &'static str, contents: &str, records: usize) -> Result<Artifact> {
        let path = self.root.join(name);
        fs::write(&path, contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), records, "Wrote artifact");

        Ok(Artifact {
            name,
            location: path.display().to_string(),
            records,
        })
    }
}

impl DatasetSink for DirectorySink {
    fn persist(&self, dataset: &Dataset) -> Result<PersistReport> {
        fs::create_dir_all(&self.root).map_err(|source| Error::Write {
            path: self.root.clone(),
            source,
        })?;

        let artifacts = vec![
            self.write(
                PROJECTS_FILE,
                &encode(&dataset.projects),
                dataset.projects.len(),
            )?,
            self.write(
                PERFORMANCE_FILE,
                &encode(&dataset.performance),
                dataset.performance.len(),
            )?,
            self.write(COSTS_FILE, &encode(&dataset.costs), dataset.costs.len())?,
            self.write(
                RECOMMENDATIONS_FILE,
                &encode(&dataset.recommendations),
                dataset.recommendations.len(),
            )?,
            self.write(ANALYSIS_FILE, &encode_analysis(&dataset.analysis)?, 1)?,
        ];

        info!(
            directory = %self.root.display(),
            artifacts = artifacts.len(),
            "Dataset written"
        );

        Ok(PersistReport {
            destination: self.root.display().to_string(),
            artifacts,
        })
    }
}
