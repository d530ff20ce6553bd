//! Record-format Ledger Repository

use std::path::Path;

use crate::domain::entities::Ledger;
use crate::domain::ports::{FileSystem, LedgerRepository, RepositoryError, RepositoryResult};
use crate::infrastructure::fs::LocalFs;

use super::records::{parse_loans, render_loans};

/// Loans file repository (`issued_books.txt` by default)
#[derive(Debug, Clone, Default)]
pub struct RecordLedgerRepository<FS = LocalFs> {
    fs: FS,
}

impl RecordLedgerRepository<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> RecordLedgerRepository<FS> {
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> LedgerRepository for RecordLedgerRepository<FS> {
    fn load(&self, path: &Path) -> RepositoryResult<Ledger> {
        if !self.fs.exists(path) {
            tracing::debug!(path = %path.display(), "loans file absent, starting empty");
            return Ok(Ledger::new());
        }

        let content = self.fs.read(path).map_err(|source| RepositoryError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        let loans = parse_loans(&content, path)?;
        tracing::debug!(path = %path.display(), count = loans.len(), "loaded loans");
        Ok(Ledger::from_loans(loans))
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> RepositoryResult<()> {
        self.fs
            .write(path, &render_loans(ledger.loans()))
            .map_err(|source| RepositoryError::Io {
                file: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), count = ledger.len(), "saved loans");
        Ok(())
    }
}
