//! Record file fixtures shared by CLI tests.

/// Two shelved books, the second already lent out
pub const TWO_BOOKS: &str = "1 0\nDune\nFrank Herbert\n2 1\nEmma\nJane Austen\n";

/// Loan record for book 2, issued at `issued` and due a week later
pub fn loan_for_book_2(issued: i64) -> String {
    format!("2 {} {}\nAna Lima\n", issued, issued + 7 * 86_400)
}

/// Current unix time in seconds
pub fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
