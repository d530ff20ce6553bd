#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use libris::infrastructure::repositories::records::{parse_loans, render_loans};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(loans) = parse_loans(content, Path::new("issued_books.txt")) {
            let rendered = render_loans(&loans);
            let again = parse_loans(&rendered, Path::new("issued_books.txt"))
                .expect("rendered loans must parse");
            assert_eq!(loans, again);
        }
    }
});
