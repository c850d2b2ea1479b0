//! Default locations, relative to the working directory.
//!
//! - `cloudshift.toml` - optional configuration file
//! - `data/` - generated artifacts

use std::path::Path;

/// Default configuration file path.
pub const DEFAULT_CONFIG: &str = "cloudshift.toml";

/// Whether `path` is the default config location (which may be absent).
pub fn is_default_config(path: &Path) -> bool {
    path == Path::new(DEFAULT_CONFIG)
}
