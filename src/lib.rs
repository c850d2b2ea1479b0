//! Cloudshift - synthetic multi-cloud migration dataset generator.
//!
//! Produces a reproducible set of related tables describing hypothetical
//! data-migration projects between AWS, GCP and Azure: the projects
//! themselves, daily performance metrics, a cost breakdown, derived
//! optimization recommendations, and an aggregate pattern analysis.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Records, fixed catalogs and pure aggregation
//! - [`application`] - The seeded generator and its sampling pipeline
//! - [`port`] - Inbound operator traits and the outbound dataset sink
//! - [`adapter`] - CLI handlers and the CSV/JSON filesystem sink
//! - [`infrastructure`] - Configuration, logging and operator wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use cloudshift::application::generator::engine::Generator;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 1)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! let dataset = Generator::at(42, now).generate_dataset(25).unwrap();
//! println!("{} performance rows", dataset.performance.len());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
