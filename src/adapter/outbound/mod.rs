//! Outbound adapters (driven side).

pub mod filesystem;
