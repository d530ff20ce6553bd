//! Output Rendering
//!
//! Provides a unified interface for rendering results as menu-style text or JSON.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ReturnReceipt;
use crate::domain::entities::{Book, Loan, OverdueLoan};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for rendering library results
pub trait Renderer {
    fn books(&self, out: &mut dyn Write, books: &[&Book]) -> io::Result<()>;
    fn book_added(&self, out: &mut dyn Write, book: &Book) -> io::Result<()>;
    fn book_deleted(&self, out: &mut dyn Write, book: &Book) -> io::Result<()>;
    fn book_issued(&self, out: &mut dyn Write, loan: &Loan) -> io::Result<()>;
    fn book_returned(&self, out: &mut dyn Write, receipt: &ReturnReceipt) -> io::Result<()>;
    fn loans(&self, out: &mut dyn Write, loans: &[Loan]) -> io::Result<()>;
    fn overdue(&self, out: &mut dyn Write, loans: &[OverdueLoan]) -> io::Result<()>;
}

/// Text renderer using the menu's wording
pub struct TextRenderer;

impl TextRenderer {
    /// One book block, followed by a blank line
    pub fn write_book(out: &mut dyn Write, book: &Book) -> io::Result<()> {
        writeln!(out, "Book ID: {}", book.id())?;
        writeln!(out, "Title: {}", book.title())?;
        writeln!(out, "Author: {}", book.author())?;
        writeln!(out, "Issued: {}", if book.is_issued() { "Yes" } else { "No" })?;
        writeln!(out)
    }

    /// Overdue notice (only when late) and the confirmation line
    pub fn write_receipt(out: &mut dyn Write, receipt: &ReturnReceipt) -> io::Result<()> {
        if receipt.is_overdue() {
            writeln!(out, "Book is overdue by {} days.", receipt.overdue_days())?;
            writeln!(out, "Fine: {} units.", receipt.fine())?;
        }
        writeln!(out, "Book returned successfully!")
    }

    fn write_loan(out: &mut dyn Write, loan: &Loan) -> io::Result<()> {
        writeln!(out, "Book ID: {}", loan.book_id())?;
        writeln!(out, "Borrower: {}", loan.borrower())?;
        writeln!(out, "Issued: {}", timestamp(loan.issued_at()))?;
        writeln!(out, "Due: {}", timestamp(loan.due_at()))
    }
}

impl Renderer for TextRenderer {
    fn books(&self, out: &mut dyn Write, books: &[&Book]) -> io::Result<()> {
        for book in books {
            Self::write_book(out, book)?;
        }
        Ok(())
    }

    fn book_added(&self, out: &mut dyn Write, _book: &Book) -> io::Result<()> {
        writeln!(out, "Book added successfully!")
    }

    fn book_deleted(&self, out: &mut dyn Write, _book: &Book) -> io::Result<()> {
        writeln!(out, "Book deleted successfully!")
    }

    fn book_issued(&self, out: &mut dyn Write, loan: &Loan) -> io::Result<()> {
        writeln!(out, "Book issued successfully!")?;
        writeln!(out, "Due: {}", timestamp(loan.due_at()))
    }

    fn book_returned(&self, out: &mut dyn Write, receipt: &ReturnReceipt) -> io::Result<()> {
        Self::write_receipt(out, receipt)
    }

    fn loans(&self, out: &mut dyn Write, loans: &[Loan]) -> io::Result<()> {
        for loan in loans {
            Self::write_loan(out, loan)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn overdue(&self, out: &mut dyn Write, loans: &[OverdueLoan]) -> io::Result<()> {
        for entry in loans {
            Self::write_loan(out, &entry.loan)?;
            writeln!(out, "Overdue by: {} days", entry.assessment.overdue_days)?;
            writeln!(out, "Fine: {} units", entry.assessment.fine)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// JSON renderer, one pretty-printed document per call
pub struct JsonRenderer;

impl JsonRenderer {
    fn emit<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)
    }
}

impl Renderer for JsonRenderer {
    fn books(&self, out: &mut dyn Write, books: &[&Book]) -> io::Result<()> {
        Self::emit(out, books)
    }

    fn book_added(&self, out: &mut dyn Write, book: &Book) -> io::Result<()> {
        Self::emit(out, book)
    }

    fn book_deleted(&self, out: &mut dyn Write, book: &Book) -> io::Result<()> {
        Self::emit(out, book)
    }

    fn book_issued(&self, out: &mut dyn Write, loan: &Loan) -> io::Result<()> {
        Self::emit(out, loan)
    }

    fn book_returned(&self, out: &mut dyn Write, receipt: &ReturnReceipt) -> io::Result<()> {
        Self::emit(out, receipt)
    }

    fn loans(&self, out: &mut dyn Write, loans: &[Loan]) -> io::Result<()> {
        Self::emit(out, loans)
    }

    fn overdue(&self, out: &mut dyn Write, loans: &[OverdueLoan]) -> io::Result<()> {
        Self::emit(out, loans)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BookId, FineAssessment};
    use chrono::TimeZone;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn loan() -> Loan {
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        Loan::new(BookId::new(4), "Ana", issued, issued + chrono::Duration::days(7))
    }

    fn receipt(assessment: FineAssessment) -> ReturnReceipt {
        let loan = loan();
        ReturnReceipt {
            returned_at: loan.due_at(),
            loan,
            assessment,
        }
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
    }

    #[test]
    fn text_book_block_matches_menu_layout() {
        let book = Book::new(BookId::new(3), "Emma", "Jane Austen").with_issued(true);
        let text = render(|out| TextRenderer.books(out, &[&book]));
        assert_eq!(
            text,
            "Book ID: 3\nTitle: Emma\nAuthor: Jane Austen\nIssued: Yes\n\n"
        );
    }

    #[test]
    fn text_receipt_on_time_has_no_fine_lines() {
        let text = render(|out| TextRenderer.book_returned(out, &receipt(FineAssessment::on_time())));
        assert_eq!(text, "Book returned successfully!\n");
    }

    #[test]
    fn text_receipt_overdue_reports_days_and_fine() {
        let late = FineAssessment {
            overdue: true,
            overdue_days: 2,
            fine: 20,
        };
        let text = render(|out| TextRenderer.book_returned(out, &receipt(late)));
        assert_eq!(
            text,
            "Book is overdue by 2 days.\nFine: 20 units.\nBook returned successfully!\n"
        );
    }

    #[test]
    fn text_loans_show_due_time() {
        let text = render(|out| TextRenderer.loans(out, &[loan()]));
        assert!(text.contains("Borrower: Ana\n"));
        assert!(text.contains("Due: 2024-03-08 09:30 UTC\n"));
    }

    #[test]
    fn json_receipt_flattens_assessment() {
        let late = FineAssessment {
            overdue: true,
            overdue_days: 1,
            fine: 10,
        };
        let text = render(|out| JsonRenderer.book_returned(out, &receipt(late)));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["fine"], 10);
        assert_eq!(value["overdue_days"], 1);
        assert_eq!(value["loan"]["borrower"], "Ana");
        assert_eq!(value["loan"]["book_id"], 4);
    }

    #[test]
    fn json_books_is_an_array() {
        let book = Book::new(BookId::new(1), "Dune", "Frank Herbert");
        let text = render(|out| create_renderer(OutputFormat::Json).books(out, &[&book]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["title"], "Dune");
        assert_eq!(value[0]["issued"], false);
    }
}
