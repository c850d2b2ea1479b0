//! JSON encoding for the pattern-analysis summary.

use crate::domain::analysis::PatternAnalysis;

/// Pretty-print the analysis with two-space indentation.
pub fn encode_analysis(analysis: &PatternAnalysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}
