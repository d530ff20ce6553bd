//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--data-dir, --json, --verbose) are inherited by all subcommands
//! - Without a subcommand the interactive menu starts

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::BookId;

/// Libris - library catalog and loan ledger
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'libris' without arguments for the interactive menu.")]
pub struct Cli {
    /// Directory holding books.txt, issued_books.txt and libris.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Catalogue a new book
    Add {
        /// Book id (must not already exist)
        #[arg(allow_negative_numbers = true)]
        id: BookId,

        /// Title (single line)
        title: String,

        /// Author (single line)
        author: String,
    },

    /// Remove a book that is not on loan
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
    },

    /// Find books whose title or author contains QUERY
    Search { query: String },

    /// Lend a book to a borrower
    Issue {
        #[arg(allow_negative_numbers = true)]
        id: BookId,

        /// Borrower name (single line)
        borrower: String,
    },

    /// Take a book back and report any fine
    Return {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
    },

    /// Display all books
    List,

    /// Show active loans
    Loans {
        /// Only loans past their due time
        #[arg(long)]
        overdue: bool,
    },
}
