//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LoanPolicy;
use crate::error::LibraryResult;

use super::loader::{self, ConfigWarning};

/// Where the record files live and how they are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Books file, relative to the data directory unless absolute
    #[serde(default = "default_books_file")]
    pub books_file: PathBuf,

    /// Loans file, relative to the data directory unless absolute
    #[serde(default = "default_loans_file")]
    pub loans_file: PathBuf,

    /// Write through a temp file and rename
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            loans_file: default_loans_file(),
            atomic_writes: true,
        }
    }
}

fn default_books_file() -> PathBuf {
    PathBuf::from("books.txt")
}

fn default_loans_file() -> PathBuf {
    PathBuf::from("issued_books.txt")
}

/// Loan period and fines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoansConfig {
    #[serde(default = "default_period_days")]
    pub period_days: u32,

    #[serde(default = "default_fine_per_day")]
    pub fine_per_day: u64,
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            fine_per_day: default_fine_per_day(),
        }
    }
}

fn default_period_days() -> u32 {
    7
}

fn default_fine_per_day() -> u64 {
    10
}

/// Search behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub loans: LoansConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LibraryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the data directory config, user config, or defaults
    pub fn load_or_default(data_dir: &Path) -> Self {
        loader::load_or_default(data_dir)
    }

    /// Loan policy built from the `[loans]` section
    pub fn loan_policy(&self) -> LoanPolicy {
        LoanPolicy::new(self.loans.period_days, self.loans.fine_per_day)
    }

    /// Resolved path of the books file
    pub fn books_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.books_file)
    }

    /// Resolved path of the loans file
    pub fn loans_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.loans_file)
    }
}
