//! Library Use Case
//!
//! Owns the in-memory catalog and ledger. Every mutating operation rewrites
//! the affected record file in full; a failed write is logged and the
//! in-memory change is kept.

use crate::domain::entities::{Book, Catalog, Ledger, Loan, OverdueLoan};
use crate::domain::ports::{CatalogRepository, Clock, LedgerRepository};
use crate::domain::value_objects::{require_line, BookId};
use crate::error::{LibraryError, LibraryResult};

use super::options::LibraryOptions;
use super::result::ReturnReceipt;

/// Library use case - catalog and loan operations with persistence
pub struct LibraryUseCase<CR, LR, C>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
{
    catalog_repo: CR,
    ledger_repo: LR,
    clock: C,
    options: LibraryOptions,
    catalog: Catalog,
    ledger: Ledger,
}

impl<CR, LR, C> LibraryUseCase<CR, LR, C>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
{
    /// Load both record files and create the use case
    ///
    /// A missing file is an empty collection; a malformed one is an error.
    pub fn open(
        catalog_repo: CR,
        ledger_repo: LR,
        clock: C,
        options: LibraryOptions,
    ) -> LibraryResult<Self> {
        let catalog = catalog_repo.load(&options.books_path)?;
        let ledger = ledger_repo.load(&options.loans_path)?;
        tracing::debug!(
            books = catalog.len(),
            loans = ledger.len(),
            "library opened"
        );

        Ok(Self {
            catalog_repo,
            ledger_repo,
            clock,
            options,
            catalog,
            ledger,
        })
    }

    pub fn options(&self) -> &LibraryOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Catalogue a new book on the shelf
    pub fn add_book(&mut self, id: BookId, title: &str, author: &str) -> LibraryResult<Book> {
        let title = require_line("title", title)?;
        let author = require_line("author", author)?;

        let book = Book::new(id, title, author);
        self.catalog.add(book.clone())?;
        tracing::info!(book = %id, title = book.title(), "book added");

        self.persist_books();
        Ok(book)
    }

    /// Remove a book from the catalog; the ledger is never touched
    pub fn delete_book(&mut self, id: BookId) -> LibraryResult<Book> {
        let removed = self.catalog.remove(id)?;
        tracing::info!(book = %id, title = removed.title(), "book deleted");

        self.persist_books();
        Ok(removed)
    }

    /// Books whose title or author contains `query`
    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.catalog.search(query, self.options.case_sensitive)
    }

    /// All books in catalog order
    pub fn list(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// Check that `id` can be issued, without changing anything
    pub fn check_available(&self, id: BookId) -> LibraryResult<&Book> {
        let book = self
            .catalog
            .get(id)
            .ok_or(LibraryError::BookNotFound { id })?;
        if book.is_issued() || self.ledger.find(id).is_some() {
            return Err(LibraryError::AlreadyIssued { id });
        }
        Ok(book)
    }

    /// Lend a book; due time follows the loan policy
    pub fn issue_book(&mut self, id: BookId, borrower: &str) -> LibraryResult<Loan> {
        self.check_available(id)?;
        let borrower = require_line("borrower", borrower)?;

        let issued_at = self.clock.now();
        let due_at = self.options.policy.due_from(issued_at).ok_or(
            LibraryError::LoanPeriodOutOfRange {
                days: self.options.policy.period_days(),
            },
        )?;
        self.catalog.check_out(id)?;
        let loan = Loan::new(id, borrower, issued_at, due_at);
        self.ledger.open(loan.clone());
        tracing::info!(book = %id, borrower = loan.borrower(), due = %due_at, "book issued");

        self.persist_books();
        self.persist_loans();
        Ok(loan)
    }

    /// Close the loan for `id` and assess any fine
    pub fn return_book(&mut self, id: BookId) -> LibraryResult<ReturnReceipt> {
        let loan = self.ledger.close(id)?;
        if !self.catalog.check_in(id) {
            tracing::warn!(book = %id, "closed a loan for a book that is not catalogued");
        }

        let returned_at = self.clock.now();
        let assessment = self.options.policy.assess(loan.due_at(), returned_at);
        tracing::info!(
            book = %id,
            overdue_days = assessment.overdue_days,
            fine = assessment.fine,
            "book returned"
        );

        self.persist_books();
        self.persist_loans();
        Ok(ReturnReceipt {
            loan,
            returned_at,
            assessment,
        })
    }

    /// Active loans in ledger order
    pub fn loans(&self) -> &[Loan] {
        self.ledger.loans()
    }

    /// Active loans past due right now
    pub fn overdue(&self) -> Vec<OverdueLoan> {
        self.ledger.overdue(&self.options.policy, self.clock.now())
    }

    fn persist_books(&self) {
        if let Err(e) = self.catalog_repo.save(&self.catalog, &self.options.books_path) {
            tracing::warn!("failed to save books: {}", e);
        }
    }

    fn persist_loans(&self) {
        if let Err(e) = self.ledger_repo.save(&self.ledger, &self.options.loans_path) {
            tracing::warn!("failed to save loans: {}", e);
        }
    }
}
