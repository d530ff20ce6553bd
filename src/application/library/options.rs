//! Library options

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::value_objects::LoanPolicy;

/// Where the library lives and which rules it applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryOptions {
    /// Books file
    pub books_path: PathBuf,
    /// Loans file
    pub loans_path: PathBuf,
    /// Loan period and fine rate
    pub policy: LoanPolicy,
    /// Whether search distinguishes case
    pub case_sensitive: bool,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        let config = Config::default();
        Self::from_config(&config, Path::new("."))
    }
}

impl LibraryOptions {
    /// Create options with default rules for the given files
    pub fn new(books_path: impl Into<PathBuf>, loans_path: impl Into<PathBuf>) -> Self {
        Self {
            books_path: books_path.into(),
            loans_path: loans_path.into(),
            ..Self::default()
        }
    }

    /// Build options from configuration rooted at `data_dir`
    pub fn from_config(config: &Config, data_dir: &Path) -> Self {
        Self {
            books_path: config.books_path(data_dir),
            loans_path: config.loans_path(data_dir),
            policy: config.loan_policy(),
            case_sensitive: config.search.case_sensitive,
        }
    }

    /// Set loan policy
    pub fn with_policy(mut self, policy: LoanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set search case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
