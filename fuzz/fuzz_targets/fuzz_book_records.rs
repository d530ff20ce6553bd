#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use libris::infrastructure::repositories::records::{parse_books, render_books};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing must never panic; whatever parses must re-parse identically
        if let Ok(books) = parse_books(content, Path::new("books.txt")) {
            let rendered = render_books(&books);
            let again = parse_books(&rendered, Path::new("books.txt"))
                .expect("rendered books must parse");
            assert_eq!(books, again);
        }
    }
});
