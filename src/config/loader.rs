//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LibraryError, LibraryResult};
use crate::infrastructure::fs::user_config_path;

use super::env_validator::{parse_bool, EnvVarValidator, BOOL_VALUES};
use super::types::Config;

/// Name of the per-library config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "libris.toml";

/// Environment variable naming the data directory
pub const DATA_DIR_VAR: &str = "LIBRIS_DATA_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LibraryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LibraryError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `<data_dir>/libris.toml`, the user config, or defaults
///
/// Parse failures and unknown keys are logged and otherwise skipped.
pub fn load_or_default(data_dir: &Path) -> Config {
    let candidates = [Some(data_dir.join(CONFIG_FILE_NAME)), user_config_path()];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded configuration");
                return with_env_overrides(config);
            }
            Err(err) => {
                tracing::warn!("ignoring configuration: {}", err);
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Resolve the data directory: CLI flag, then `LIBRIS_DATA_DIR`, then cwd
pub fn resolve_data_dir(cli: Option<&Path>) -> PathBuf {
    resolve_data_dir_from(cli, |name| std::env::var(name).ok())
}

/// [`resolve_data_dir`] with an injectable environment lookup
pub fn resolve_data_dir_from<F>(cli: Option<&Path>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = cli {
        return dir.to_path_buf();
    }
    lookup(DATA_DIR_VAR)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Apply environment variable overrides (LIBRIS_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_from(config, |name| std::env::var(name).ok())
}

/// [`with_env_overrides`] with an injectable lookup
///
/// Invalid values are logged and leave the configured value in place.
pub fn with_env_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(days) = lookup("LIBRIS_LOAN_DAYS") {
        config.loans.period_days = EnvVarValidator::new("LIBRIS_LOAN_DAYS", &[]).parse(
            &days,
            |s| s.trim().parse::<u32>().ok(),
            config.loans.period_days,
        );
    }

    if let Some(fine) = lookup("LIBRIS_FINE_PER_DAY") {
        config.loans.fine_per_day = EnvVarValidator::new("LIBRIS_FINE_PER_DAY", &[]).parse(
            &fine,
            |s| s.trim().parse::<u64>().ok(),
            config.loans.fine_per_day,
        );
    }

    if let Some(val) = lookup("LIBRIS_ATOMIC_WRITES") {
        config.storage.atomic_writes = EnvVarValidator::new("LIBRIS_ATOMIC_WRITES", BOOL_VALUES)
            .parse(&val, parse_bool, config.storage.atomic_writes);
    }

    if let Some(val) = lookup("LIBRIS_CASE_SENSITIVE") {
        config.search.case_sensitive = EnvVarValidator::new("LIBRIS_CASE_SENSITIVE", BOOL_VALUES)
            .parse(&val, parse_bool, config.search.case_sensitive);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "books_file",
        "loans_file",
        "atomic_writes",
        "loans",
        "period_days",
        "fine_per_day",
        "search",
        "case_sensitive",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = super::env_validator::levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
