//! Application services (use cases).
//!
//! These services orchestrate domain logic to produce the synthetic
//! migration dataset.

pub mod generator;
