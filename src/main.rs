//! Libris CLI - library catalog and loan ledger
//!
//! Usage: libris [COMMAND]
//!
//! Without a command the interactive menu starts.
//!
//! Commands:
//!   add     Catalogue a new book
//!   delete  Remove a book that is not on loan
//!   search  Find books by title or author
//!   issue   Lend a book
//!   return  Take a book back and report any fine
//!   list    Display all books
//!   loans   Show active loans

mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use libris::config::{resolve_data_dir, Config};
use libris::domain::ports::{CatalogRepository, Clock, LedgerRepository};
use libris::presentation::{
    create_library_use_case, create_renderer, logging, Cli, Commands, OutputFormat,
};

use commands::catalog::{finish, CommandContext};
use commands::menu::Menu;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config = Config::load_or_default(&data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let mut library = create_library_use_case(&config, &data_dir)
        .with_context(|| format!("failed to open library in {}", data_dir.display()))?;

    match cli.command {
        None => {
            let stdin = io::stdin();
            Menu::new(&mut library, stdin.lock(), io::stdout().lock()).run()?;
        }
        Some(command) => {
            let renderer = create_renderer(OutputFormat::from_json_flag(cli.json));
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_command(
                CommandContext {
                    library: &mut library,
                    renderer: renderer.as_ref(),
                    out: &mut out,
                },
                command,
            )?;
            finish(&mut out)?;
        }
    }

    Ok(())
}

fn run_command<CR, LR, C>(mut ctx: CommandContext<'_, CR, LR, C>, command: Commands) -> Result<()>
where
    CR: CatalogRepository,
    LR: LedgerRepository,
    C: Clock,
{
    match command {
        Commands::Add { id, title, author } => ctx.cmd_add(id, &title, &author),
        Commands::Delete { id } => ctx.cmd_delete(id),
        Commands::Search { query } => ctx.cmd_search(&query),
        Commands::Issue { id, borrower } => ctx.cmd_issue(id, &borrower),
        Commands::Return { id } => ctx.cmd_return(id),
        Commands::List => ctx.cmd_list(),
        Commands::Loans { overdue } => ctx.cmd_loans(overdue),
    }
}
