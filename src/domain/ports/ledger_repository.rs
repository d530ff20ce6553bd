//! LedgerRepository port - abstraction for loan ledger persistence

use std::path::Path;

use crate::domain::entities::Ledger;

use super::RepositoryResult;

/// Abstract repository for the active loans
pub trait LedgerRepository {
    /// Load the ledger from `path`; a missing file is an empty ledger
    fn load(&self, path: &Path) -> RepositoryResult<Ledger>;

    /// Rewrite `path` with every loan in `ledger`
    fn save(&self, ledger: &Ledger, path: &Path) -> RepositoryResult<()>;
}
