//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration loading, logging bootstrap, and the operator
//! that wires the generator to the filesystem sink.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - CLI operator interface

pub mod config;
pub mod operator;
