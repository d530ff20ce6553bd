//! Book entity - one catalogued title

use serde::Serialize;

use crate::domain::value_objects::BookId;

/// A book record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    issued: bool,
}

impl Book {
    /// Create a book that is on the shelf
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            issued: false,
        }
    }

    /// Set the issued flag (used when rebuilding from stored records)
    pub fn with_issued(mut self, issued: bool) -> Self {
        self.issued = issued;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_issued(&self) -> bool {
        self.issued
    }

    pub(crate) fn mark_issued(&mut self) {
        self.issued = true;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.issued = false;
    }

    /// Substring match against title or author
    pub fn matches(&self, query: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.title.contains(query) || self.author.contains(query)
        } else {
            let query = query.to_lowercase();
            self.title.to_lowercase().contains(&query)
                || self.author.to_lowercase().contains(&query)
        }
    }
}
