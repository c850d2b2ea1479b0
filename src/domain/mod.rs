//! Domain model: value records, catalogs and pure aggregation.

pub mod analysis;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod label;
pub mod metric;
pub mod project;
pub mod provider;
pub mod recommendation;
pub mod stats;
