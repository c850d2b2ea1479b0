//! Inputs that fully determine a generation run.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::error::GenerationError;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Number of projects generated when none is configured.
pub const DEFAULT_PROJECT_COUNT: usize = 25;

/// Seed, size and clock for a generator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Seed for the generator's random stream.
    pub seed: u64,
    /// Number of projects to generate.
    pub projects: usize,
    /// Pinned "now"; `None` reads the local clock when the generator is built.
    pub reference_time: Option<NaiveDateTime>,
}

impl GeneratorSettings {
    /// Build validated settings.
    pub fn new(
        seed: u64,
        projects: usize,
        reference_time: Option<NaiveDateTime>,
    ) -> Result<Self, GenerationError> {
        let settings = Self {
            seed,
            projects,
            reference_time,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot produce a dataset.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.projects == 0 {
            return Err(GenerationError::EmptyProjectCount);
        }
        Ok(())
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            projects: DEFAULT_PROJECT_COUNT,
            reference_time: None,
        }
    }
}

/// Parse a reference time from a date or a date-time.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`,
/// with optional fractional seconds. A bare date means midnight.
pub fn parse_reference_time(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(value);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid reference time '{raw}' (expected YYYY-MM-DD[THH:MM:SS])"))
}
