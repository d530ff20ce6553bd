//! One-shot subcommand handlers
//!
//! Each handler runs a single library operation and renders the outcome.

use std::io::{self, Write};

use anyhow::Result;

use libris::domain::ports::{CatalogRepository, Clock, LedgerRepository};
use libris::presentation::Renderer;
use libris::{BookId, LibraryUseCase};

/// Library plus the renderer and stream results go to
pub struct CommandContext<'a, CR, LR, C>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
{
    pub library: &'a mut LibraryUseCase<CR, LR, C>,
    pub renderer: &'a dyn Renderer,
    pub out: &'a mut dyn Write,
}

impl<CR, LR, C> CommandContext<'_, CR, LR, C>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
{
    pub fn cmd_add(&mut self, id: BookId, title: &str, author: &str) -> Result<()> {
        let book = self.library.add_book(id, title, author)?;
        self.renderer.book_added(self.out, &book)?;
        Ok(())
    }

    pub fn cmd_delete(&mut self, id: BookId) -> Result<()> {
        let book = self.library.delete_book(id)?;
        self.renderer.book_deleted(self.out, &book)?;
        Ok(())
    }

    pub fn cmd_search(&mut self, query: &str) -> Result<()> {
        let hits = self.library.search(query);
        self.renderer.books(self.out, &hits)?;
        Ok(())
    }

    pub fn cmd_issue(&mut self, id: BookId, borrower: &str) -> Result<()> {
        let loan = self.library.issue_book(id, borrower)?;
        self.renderer.book_issued(self.out, &loan)?;
        Ok(())
    }

    pub fn cmd_return(&mut self, id: BookId) -> Result<()> {
        let receipt = self.library.return_book(id)?;
        self.renderer.book_returned(self.out, &receipt)?;
        Ok(())
    }

    pub fn cmd_list(&mut self) -> Result<()> {
        let books: Vec<_> = self.library.list().iter().collect();
        self.renderer.books(self.out, &books)?;
        Ok(())
    }

    pub fn cmd_loans(&mut self, overdue_only: bool) -> Result<()> {
        if overdue_only {
            let overdue = self.library.overdue();
            self.renderer.overdue(self.out, &overdue)?;
        } else {
            self.renderer.loans(self.out, self.library.loans())?;
        }
        Ok(())
    }
}

/// Flush stdout, ignoring a closed pipe
pub fn finish(out: &mut dyn Write) -> io::Result<()> {
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, TimeZone, Utc};
    use libris::infrastructure::{FixedClock, MemoryFs, RecordCatalogRepository, RecordLedgerRepository};
    use libris::presentation::output::{JsonRenderer, TextRenderer};
    use libris::LibraryOptions;

    type TestLibrary = LibraryUseCase<
        RecordCatalogRepository<MemoryFs>,
        RecordLedgerRepository<MemoryFs>,
        FixedClock,
    >;

    type TestContext<'a> = CommandContext<
        'a,
        RecordCatalogRepository<MemoryFs>,
        RecordLedgerRepository<MemoryFs>,
        FixedClock,
    >;

    fn library(clock: &FixedClock) -> TestLibrary {
        let fs = MemoryFs::new();
        LibraryUseCase::open(
            RecordCatalogRepository::with_fs(fs.clone()),
            RecordLedgerRepository::with_fs(fs),
            clock.clone(),
            LibraryOptions::new("books.txt", "issued_books.txt"),
        )
        .unwrap()
    }

    fn run<F>(lib: &mut TestLibrary, renderer: &dyn Renderer, f: F) -> (Result<()>, String)
    where
        F: FnOnce(&mut TestContext<'_>) -> Result<()>,
    {
        let mut buf = Vec::new();
        let result = {
            let mut ctx = CommandContext {
                library: lib,
                renderer,
                out: &mut buf,
            };
            f(&mut ctx)
        };
        (result, String::from_utf8(buf).unwrap())
    }

    fn clock() -> FixedClock {
        FixedClock::at(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    }

    #[test]
    fn test_add_and_list_text() {
        let clock = clock();
        let mut lib = library(&clock);

        let (res, out) = run(&mut lib, &TextRenderer, |c| {
            c.cmd_add(BookId::new(1), "Dune", "Frank Herbert")
        });
        res.unwrap();
        assert_eq!(out, "Book added successfully!\n");

        let (res, out) = run(&mut lib, &TextRenderer, |c| c.cmd_list());
        res.unwrap();
        assert!(out.starts_with("Book ID: 1\nTitle: Dune\n"));
    }

    #[test]
    fn test_delete_missing_is_error() {
        let clock = clock();
        let mut lib = library(&clock);

        let (res, out) = run(&mut lib, &TextRenderer, |c| c.cmd_delete(BookId::new(3)));
        assert_eq!(res.unwrap_err().to_string(), "book 3 not found");
        assert!(out.is_empty());
    }

    #[test]
    fn test_return_json_contains_fine() {
        let clock = clock();
        let mut lib = library(&clock);
        lib.add_book(BookId::new(1), "Dune", "Frank Herbert").unwrap();
        lib.issue_book(BookId::new(1), "Ana").unwrap();
        clock.advance(Duration::days(9));

        let (res, out) = run(&mut lib, &JsonRenderer, |c| c.cmd_return(BookId::new(1)));
        res.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["overdue"], true);
        assert_eq!(value["fine"], 20);
    }

    #[test]
    fn test_loans_overdue_filter() {
        let clock = clock();
        let mut lib = library(&clock);
        lib.add_book(BookId::new(1), "Dune", "Frank Herbert").unwrap();
        lib.add_book(BookId::new(2), "Emma", "Jane Austen").unwrap();
        lib.issue_book(BookId::new(1), "Ana").unwrap();
        clock.advance(Duration::days(8));
        lib.issue_book(BookId::new(2), "Ben").unwrap();

        let (res, out) = run(&mut lib, &JsonRenderer, |c| c.cmd_loans(true));
        res.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["loan"]["borrower"], "Ana");

        let (res, out) = run(&mut lib, &JsonRenderer, |c| c.cmd_loans(false));
        res.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
