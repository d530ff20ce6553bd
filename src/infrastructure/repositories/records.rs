//! Line-record codec for the books and loans files
//!
//! Books, three lines each:
//!
//! ```text
//! <id> <issued 0|1>
//! <title>
//! <author>
//! ```
//!
//! Loans, two lines each:
//!
//! ```text
//! <book id> <issued at, unix seconds> <due at, unix seconds>
//! <borrower>
//! ```
//!
//! No header, no escaping. Blank lines between records are skipped; text
//! lines are taken verbatim.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Book, Loan};
use crate::domain::ports::RepositoryError;
use crate::domain::value_objects::BookId;

/// Line cursor that remembers 1-based line numbers for error reports
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.lines().enumerate(),
            last: 0,
        }
    }

    /// Next non-blank line (record header), or None at end of input
    fn next_header(&mut self) -> Option<(usize, &'a str)> {
        for (i, line) in self.inner.by_ref() {
            self.last = i + 1;
            if !line.trim().is_empty() {
                return Some((i + 1, line));
            }
        }
        None
    }

    /// Next line verbatim apart from stray trailing carriage returns
    fn next_text(&mut self) -> Option<(usize, &'a str)> {
        let (i, line) = self.inner.next()?;
        self.last = i + 1;
        Some((i + 1, line.trim_end_matches('\r')))
    }
}

fn invalid(file: &Path, line: usize, message: impl Into<String>) -> RepositoryError {
    RepositoryError::InvalidRecord {
        file: file.to_path_buf(),
        line,
        message: message.into(),
    }
}

fn parse_flag(token: &str) -> Option<bool> {
    match token {
        "0" | "false" => Some(false),
        "1" | "true" => Some(true),
        _ => None,
    }
}

fn parse_timestamp(token: &str) -> Option<DateTime<Utc>> {
    let secs = token.parse::<i64>().ok()?;
    Utc.timestamp_opt(secs, 0).single()
}

/// Parse the books file
pub fn parse_books(content: &str, file: &Path) -> Result<Vec<Book>, RepositoryError> {
    let mut lines = Lines::new(content);
    let mut books = Vec::new();

    while let Some((line_no, header)) = lines.next_header() {
        let mut fields = header.split_whitespace();
        let (Some(id), Some(flag), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(invalid(file, line_no, "expected '<id> <issued>'"));
        };
        let id: BookId = id
            .parse()
            .map_err(|_| invalid(file, line_no, format!("invalid book id '{}'", id)))?;
        let issued = parse_flag(flag)
            .ok_or_else(|| invalid(file, line_no, format!("invalid issued flag '{}'", flag)))?;

        let (_, title) = lines
            .next_text()
            .ok_or_else(|| invalid(file, lines.last + 1, "missing title line"))?;
        let (_, author) = lines
            .next_text()
            .ok_or_else(|| invalid(file, lines.last + 1, "missing author line"))?;

        books.push(Book::new(id, title, author).with_issued(issued));
    }

    Ok(books)
}

/// Render the books file
pub fn render_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(&format!(
            "{} {}\n{}\n{}\n",
            book.id(),
            u8::from(book.is_issued()),
            book.title(),
            book.author()
        ));
    }
    out
}

/// Parse the loans file
pub fn parse_loans(content: &str, file: &Path) -> Result<Vec<Loan>, RepositoryError> {
    let mut lines = Lines::new(content);
    let mut loans = Vec::new();

    while let Some((line_no, header)) = lines.next_header() {
        let mut fields = header.split_whitespace();
        let (Some(id), Some(issued_at), Some(due_at), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid(
                file,
                line_no,
                "expected '<book id> <issued at> <due at>'",
            ));
        };
        let id: BookId = id
            .parse()
            .map_err(|_| invalid(file, line_no, format!("invalid book id '{}'", id)))?;
        let issued_at = parse_timestamp(issued_at).ok_or_else(|| {
            invalid(file, line_no, format!("invalid issue timestamp '{}'", issued_at))
        })?;
        let due_at = parse_timestamp(due_at)
            .ok_or_else(|| invalid(file, line_no, format!("invalid due timestamp '{}'", due_at)))?;

        let (_, borrower) = lines
            .next_text()
            .ok_or_else(|| invalid(file, lines.last + 1, "missing borrower line"))?;

        loans.push(Loan::new(id, borrower, issued_at, due_at));
    }

    Ok(loans)
}

/// Render the loans file
pub fn render_loans<'a>(loans: impl IntoIterator<Item = &'a Loan>) -> String {
    let mut out = String::new();
    for loan in loans {
        out.push_str(&format!(
            "{} {} {}\n{}\n",
            loan.book_id(),
            loan.issued_at().timestamp(),
            loan.due_at().timestamp(),
            loan.borrower()
        ));
    }
    out
}
