//! Cloud provider catalog.

use super::label::labeled_enum;

labeled_enum! {
    /// A cloud platform a project migrates from or to.
    pub enum CloudProvider {
        Aws => "AWS",
        Gcp => "GCP",
        Azure => "Azure",
    }
}

impl CloudProvider {
    /// Managed data services offered by the provider.
    #[must_use]
    pub const fn services(self) -> &'static [&'static str] {
        match self {
            CloudProvider::Aws => &["S3", "Redshift", "EMR", "Glue", "QuickSight"],
            CloudProvider::Gcp => &[
                "Cloud Storage",
                "BigQuery",
                "Dataflow",
                "Dataproc",
                "Looker",
            ],
            CloudProvider::Azure => &[
                "Blob Storage",
                "Synapse",
                "Data Factory",
                "HDInsight",
                "Power BI",
            ],
        }
    }

    /// Regions the provider is modeled in.
    #[must_use]
    pub const fn regions(self) -> &'static [&'static str] {
        match self {
            CloudProvider::Aws => &["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1"],
            CloudProvider::Gcp => &["us-central1", "us-west1", "europe-west1", "asia-southeast1"],
            CloudProvider::Azure => &["East US", "West US 2", "West Europe", "Southeast Asia"],
        }
    }

    /// Relative cost multiplier (AWS = 1.0).
    #[must_use]
    pub const fn cost_factor(self) -> f64 {
        match self {
            CloudProvider::Aws => 1.0,
            CloudProvider::Gcp => 0.9,
            CloudProvider::Azure => 1.1,
        }
    }

    /// All other providers, in catalog order.
    #[must_use]
    pub fn alternatives(self) -> Vec<CloudProvider> {
        Self::ALL.iter().copied().filter(|p| *p != self).collect()
    }
}
