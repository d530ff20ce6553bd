//! Configuration module for Libris
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIBRIS_*)
//! 3. Library config (<data-dir>/libris.toml)
//! 4. User config (~/.config/libris/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, parse_bool, EnvVarValidator};
pub use loader::{
    load_with_warnings, resolve_data_dir, resolve_data_dir_from, with_env_from, ConfigWarning,
    CONFIG_FILE_NAME, DATA_DIR_VAR,
};
pub use types::{Config, LoansConfig, SearchConfig, StorageConfig};
