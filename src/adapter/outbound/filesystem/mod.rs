//! Flat-file outbound adapter: CSV tables and a JSON summary on disk.

pub mod csv;
pub mod directory;
pub mod json;
