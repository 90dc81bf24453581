//! CLI commands.

pub mod build;
pub mod check;
pub mod serve;

use std::path::{Path, PathBuf};

/// Directory holding optional `base.html` template overrides.
pub const TEMPLATES_DIR: &str = "templates";

/// Resolve `relative` against the directory containing the config file.
///
/// Static files and templates live next to the config, so a site can be
/// built from any working directory.
pub fn site_path(config_path: &Path, relative: &str) -> PathBuf {
    let relative = Path::new(relative);
    if relative.is_absolute() {
        return relative.to_path_buf();
    }
    config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(relative)
}
