//! Property tests for the books and loans record files.

use std::path::Path;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use libris::infrastructure::repositories::records::{
    parse_books, parse_loans, render_books, render_loans,
};
use libris::{Book, BookId, Loan};

/// Single-line text: any printable characters, not blank
fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^\r\n]{0,24}")
        .unwrap()
        .prop_filter("must not be blank", |s| !s.trim().is_empty())
}

fn book() -> impl Strategy<Value = Book> {
    (any::<i64>(), field(), field(), any::<bool>())
        .prop_map(|(id, title, author, issued)| {
            Book::new(BookId::new(id), title, author).with_issued(issued)
        })
}

fn loan() -> impl Strategy<Value = Loan> {
    (any::<i64>(), field(), 0i64..4_000_000_000, 0i64..10_000_000).prop_map(
        |(id, borrower, issued, period)| {
            let issued_at = Utc.timestamp_opt(issued, 0).unwrap();
            let due_at = Utc.timestamp_opt(issued + period, 0).unwrap();
            Loan::new(BookId::new(id), borrower, issued_at, due_at)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering then parsing the books file is lossless.
    #[test]
    fn property_books_survive_save_and_load(books in proptest::collection::vec(book(), 0..8)) {
        let content = render_books(&books);
        let parsed = parse_books(&content, Path::new("books.txt")).unwrap();
        prop_assert_eq!(parsed, books);
    }

    /// PROPERTY: rendering then parsing the loans file is lossless.
    #[test]
    fn property_loans_survive_save_and_load(loans in proptest::collection::vec(loan(), 0..8)) {
        let content = render_loans(&loans);
        let parsed = parse_loans(&content, Path::new("issued_books.txt")).unwrap();
        prop_assert_eq!(parsed, loans);
    }

    /// PROPERTY: the parsers never panic on arbitrary input.
    #[test]
    fn property_parsers_never_panic(content in ".{0,200}") {
        let _ = parse_books(&content, Path::new("books.txt"));
        let _ = parse_loans(&content, Path::new("issued_books.txt"));
    }
}
