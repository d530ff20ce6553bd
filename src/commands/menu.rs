//! Interactive menu
//!
//! The numbered menu over stdin/stdout. Each choice prompts for its inputs
//! line by line; end of input behaves like choosing Exit.

use std::io::{self, BufRead, Write};

use libris::domain::ports::{CatalogRepository, Clock, LedgerRepository};
use libris::presentation::TextRenderer;
use libris::{BookId, LibraryError, LibraryUseCase};

const MENU: &str = "\nLibrary Management System\n\
1. Add Book\n\
2. Delete Book\n\
3. Search Book\n\
4. Issue Book\n\
5. Return Book\n\
6. Display All Books\n\
7. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu session bound to one library and one pair of streams
pub struct Menu<'a, CR, LR, C, R, W>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
    R: BufRead,
    W: Write,
{
    library: &'a mut LibraryUseCase<CR, LR, C>,
    input: R,
    output: W,
}

impl<'a, CR, LR, C, R, W> Menu<'a, CR, LR, C, R, W>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
    R: BufRead,
    W: Write,
{
    pub fn new(library: &'a mut LibraryUseCase<CR, LR, C>, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Show the menu until Exit or end of input
    pub fn run(mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.ask("Enter your choice: ")? else {
                writeln!(self.output, "Exiting...")?;
                break;
            };

            let flow = match choice.trim().parse::<u32>() {
                Ok(1) => self.add_book()?,
                Ok(2) => self.delete_book()?,
                Ok(3) => self.search_books()?,
                Ok(4) => self.issue_book()?,
                Ok(5) => self.return_book()?,
                Ok(6) => self.display_books()?,
                Ok(7) => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter book ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(title) = self.ask("Enter book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.ask("Enter book author: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.add_book(id, &title, &author) {
            Ok(_) => writeln!(self.output, "Book added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter book ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        match self.library.delete_book(id) {
            Ok(_) => writeln!(self.output, "Book deleted successfully!")?,
            Err(LibraryError::BookNotFound { .. }) => writeln!(self.output, "Book not found!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> io::Result<Flow> {
        let Some(query) = self.ask("Enter book title or author to search: ")? else {
            return Ok(Flow::Exit);
        };

        for book in self.library.search(&query) {
            TextRenderer::write_book(&mut self.output, book)?;
        }
        Ok(Flow::Continue)
    }

    fn issue_book(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter book ID to issue: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        if self.library.check_available(id).is_err() {
            writeln!(self.output, "Book not found or already issued!")?;
            return Ok(Flow::Continue);
        }
        let Some(borrower) = self.ask("Enter borrower name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.issue_book(id, &borrower) {
            Ok(_) => writeln!(self.output, "Book issued successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_id("Enter book ID to return: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        match self.library.return_book(id) {
            Ok(receipt) => TextRenderer::write_receipt(&mut self.output, &receipt)?,
            Err(LibraryError::LoanNotFound { .. }) => {
                writeln!(self.output, "Issued book not found!")?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nAll Books:")?;
        for book in self.library.list() {
            TextRenderer::write_book(&mut self.output, book)?;
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &LibraryError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", err)
    }

    /// Prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a book id; the inner `None` means it did not parse
    fn ask_id(&mut self, prompt: &str) -> io::Result<Option<Option<BookId>>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        match raw.parse::<BookId>() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.output, "Invalid book ID!")?;
                Ok(Some(None))
            }
        }
    }
}
