//! Aggregate pattern analysis over the project table.
//!
//! Everything here is a pure reduction over a project slice: no sampling,
//! no clock. The serialized shape is the `migration_analysis.json` artifact.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::project::MigrationProject;
use super::stats::mean;

/// Label → count tallies, most frequent first.
///
/// Ties keep the order in which labels first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts {
    entries: Vec<(String, usize)>,
}

impl ValueCounts {
    /// Tally labels from an iterator.
    pub fn tally<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for label in labels {
            let label = label.as_ref();
            match entries.iter_mut().find(|(seen, _)| seen == label) {
                Some((_, count)) => *count += 1,
                None => entries.push((label.to_string(), 1)),
            }
        }
        // Stable sort keeps first-appearance order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ValueCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (label, count) in self.iter() {
            map.serialize_entry(label, &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudPreferences {
    pub source_distribution: ValueCounts,
    pub target_distribution: ValueCounts,
}

/// Column means; `None` (serialized as `null`) for an empty table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageMetrics {
    pub avg_data_size_gb: Option<f64>,
    pub avg_complexity: Option<f64>,
    pub avg_cost_usd: Option<f64>,
    pub avg_team_size: Option<f64>,
}

/// Descriptive statistics over the full project table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternAnalysis {
    pub cloud_preferences: CloudPreferences,
    pub migration_strategies: ValueCounts,
    pub data_types: ValueCounts,
    pub average_metrics: AverageMetrics,
    pub status_distribution: ValueCounts,
}

impl PatternAnalysis {
    /// Summarize a project table.
    #[must_use]
    pub fn from_projects(projects: &[MigrationProject]) -> Self {
        Self {
            cloud_preferences: CloudPreferences {
                source_distribution: ValueCounts::tally(
                    projects.iter().map(|p| p.source_cloud.label()),
                ),
                target_distribution: ValueCounts::tally(
                    projects.iter().map(|p| p.target_cloud.label()),
                ),
            },
            migration_strategies: ValueCounts::tally(
                projects.iter().map(|p| p.migration_strategy.label()),
            ),
            data_types: ValueCounts::tally(projects.iter().map(|p| p.data_type.label())),
            average_metrics: AverageMetrics {
                avg_data_size_gb: mean(projects.iter().map(|p| p.data_size_gb)),
                avg_complexity: mean(projects.iter().map(|p| p.complexity_score)),
                avg_cost_usd: mean(projects.iter().map(|p| p.estimated_cost_usd)),
                avg_team_size: mean(projects.iter().map(|p| f64::from(p.team_size))),
            },
            status_distribution: ValueCounts::tally(projects.iter().map(|p| p.status.label())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_orders_by_count_then_first_seen() {
        let counts = ValueCounts::tally(["b", "a", "c", "a", "c", "d"]);
        let order: Vec<_> = counts.iter().collect();
        assert_eq!(order, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn value_counts_serialize_as_ordered_object() {
        let counts = ValueCounts::tally(["GCP", "AWS", "AWS"]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"AWS":2,"GCP":1}"#);
    }

    #[test]
    fn empty_table_has_null_means() {
        let analysis = PatternAnalysis::from_projects(&[]);
        assert!(analysis.status_distribution.is_empty());
        assert_eq!(analysis.average_metrics.avg_cost_usd, None);

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["average_metrics"]["avg_cost_usd"].is_null());
    }
}
