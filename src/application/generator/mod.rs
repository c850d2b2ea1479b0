//! Seeded synthetic dataset generation.

pub mod cost;
pub mod engine;
pub mod metric;
pub mod project;
pub mod recommendation;
pub mod sampler;
pub mod settings;
pub mod weighted;
