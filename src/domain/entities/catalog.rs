//! Catalog entity - the ordered collection of books
//!
//! Catalog order is insertion order and is preserved through persistence.
//! Records loaded from disk are accepted as they are, so lookups always act
//! on the first book with a given id.

use crate::domain::value_objects::BookId;
use crate::error::{LibraryError, LibraryResult};

use super::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    /// Append a book; the id must not be catalogued yet
    pub fn add(&mut self, book: Book) -> LibraryResult<()> {
        if self.contains(book.id()) {
            return Err(LibraryError::DuplicateId { id: book.id() });
        }
        self.books.push(book);
        Ok(())
    }

    /// Remove the first book with `id`; books on loan stay put
    pub fn remove(&mut self, id: BookId) -> LibraryResult<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id() == id)
            .ok_or(LibraryError::BookNotFound { id })?;
        if self.books[index].is_issued() {
            return Err(LibraryError::BookOnLoan { id });
        }
        Ok(self.books.remove(index))
    }

    /// Every book whose title or author contains `query`, in catalog order
    pub fn search(&self, query: &str, case_sensitive: bool) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.matches(query, case_sensitive))
            .collect()
    }

    /// Flag the book as issued; fails if missing or already out
    pub fn check_out(&mut self, id: BookId) -> LibraryResult<&Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(LibraryError::BookNotFound { id })?;
        if book.is_issued() {
            return Err(LibraryError::AlreadyIssued { id });
        }
        book.mark_issued();
        Ok(&*book)
    }

    /// Clear the issued flag; returns false when no book has this id
    pub fn check_in(&mut self, id: BookId) -> bool {
        match self.books.iter_mut().find(|b| b.id() == id) {
            Some(book) => {
                book.mark_returned();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add(Book::new(BookId::new(1), "Dune", "Frank Herbert"))
            .unwrap();
        catalog
            .add(Book::new(BookId::new(2), "Foundation", "Isaac Asimov"))
            .unwrap();
        catalog
            .add(Book::new(BookId::new(3), "I, Robot", "Isaac Asimov"))
            .unwrap();
        catalog
    }

    #[test]
    fn add_keeps_insertion_order() {
        let catalog = sample();
        let ids: Vec<i64> = catalog.books().iter().map(|b| b.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut catalog = sample();
        let err = catalog
            .add(Book::new(BookId::new(2), "Other", "Someone"))
            .unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateId { .. }));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn remove_missing_leaves_catalog_unchanged() {
        let mut catalog = sample();
        let before = catalog.clone();
        let err = catalog.remove(BookId::new(99)).unwrap_err();
        assert!(matches!(err, LibraryError::BookNotFound { .. }));
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_refuses_issued_book() {
        let mut catalog = sample();
        catalog.check_out(BookId::new(1)).unwrap();
        let err = catalog.remove(BookId::new(1)).unwrap_err();
        assert!(matches!(err, LibraryError::BookOnLoan { .. }));
        assert!(catalog.contains(BookId::new(1)));
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut catalog = Catalog::from_books(vec![
            Book::new(BookId::new(5), "First", "A"),
            Book::new(BookId::new(5), "Second", "B"),
        ]);
        let removed = catalog.remove(BookId::new(5)).unwrap();
        assert_eq!(removed.title(), "First");
        assert_eq!(catalog.get(BookId::new(5)).unwrap().title(), "Second");
    }

    #[test]
    fn search_returns_all_matches_in_order() {
        let catalog = sample();
        let hits: Vec<&str> = catalog
            .search("Asimov", true)
            .into_iter()
            .map(|b| b.title())
            .collect();
        assert_eq!(hits, vec!["Foundation", "I, Robot"]);
        assert!(catalog.search("asimov", true).is_empty());
        assert_eq!(catalog.search("asimov", false).len(), 2);
    }

    #[test]
    fn check_out_twice_fails() {
        let mut catalog = sample();
        catalog.check_out(BookId::new(2)).unwrap();
        let err = catalog.check_out(BookId::new(2)).unwrap_err();
        assert!(matches!(err, LibraryError::AlreadyIssued { .. }));
    }

    #[test]
    fn check_in_reports_missing_book() {
        let mut catalog = sample();
        catalog.check_out(BookId::new(3)).unwrap();
        assert!(catalog.check_in(BookId::new(3)));
        assert!(!catalog.get(BookId::new(3)).unwrap().is_issued());
        assert!(!catalog.check_in(BookId::new(42)));
    }
}
