//! Domain errors raised while generating a dataset.
//!
//! Generation has no recoverable paths: these errors surface invalid
//! settings or distribution parameters before (or instead of) producing
//! partial tables.

use thiserror::Error;

/// Errors that occur when generation inputs violate domain rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// At least one project must be requested.
    #[error("project count must be positive, got 0")]
    EmptyProjectCount,

    /// A sampling distribution rejected its parameters.
    #[error("invalid parameters for {distribution} distribution: {reason}")]
    InvalidDistribution {
        /// Name of the distribution (e.g. `normal`).
        distribution: &'static str,
        /// Reason reported by the sampler.
        reason: String,
    },

    /// A categorical choice was attempted over an empty catalog.
    #[error("cannot choose from empty catalog: {catalog}")]
    EmptyCatalog {
        /// Name of the catalog.
        catalog: &'static str,
    },
}
