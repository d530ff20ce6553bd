//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//! - Log subscriber setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber wired to stderr
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use libris::presentation::factory;
//!
//! let config = libris::config::Config::load_or_default(&data_dir);
//! let mut library = factory::create_library_use_case(&config, &data_dir)?;
//! library.add_book(BookId::new(1), "Dune", "Frank Herbert")?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_library_use_case, ConcreteLibraryUseCase};
pub use output::{create_renderer, OutputFormat, Renderer, TextRenderer};
