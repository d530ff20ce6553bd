//! Home directory resolution with test isolation support.
//!
//! `libris_home_dir()` checks `LIBRIS_TEST_HOME` first and falls back to
//! `dirs::home_dir()`. The user config lives under
//! `<home>/.config/libris/config.toml`.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const LIBRIS_TEST_HOME_VAR: &str = "LIBRIS_TEST_HOME";

/// Get the home directory for Libris-internal paths.
pub fn libris_home_dir() -> Option<PathBuf> {
    std::env::var(LIBRIS_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Path of the per-user config file, if a home directory is known.
///
/// Honors `XDG_CONFIG_HOME` unless a test home is set.
pub fn user_config_path() -> Option<PathBuf> {
    if std::env::var_os(LIBRIS_TEST_HOME_VAR).is_none() {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("libris/config.toml"));
        }
    }
    libris_home_dir().map(|home| home.join(".config/libris/config.toml"))
}
