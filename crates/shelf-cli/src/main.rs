//! Shelf CLI - a personal library catalog kept in a single JSON file
//!
//! This is the command-line interface for Shelf. It exposes the catalog
//! actions as subcommands and as an interactive menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use log::debug;

use shelf_core::ShelfError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, list, menu, misc, remove, search, stats};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let _logger = logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        debug!("event=command_failed error={}", e);
        let ui_ctx = ctx.ui_context(false, None);
        let (message, hint) = split_error(&ctx, &e);
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an error into its message and a hint, either the one embedded in
/// the message or a contextual one for storage failures.
fn split_error(ctx: &AppContext, err: &anyhow::Error) -> (String, Option<String>) {
    let text = err.to_string();
    if let Some(idx) = text.find("\nHint:") {
        let hint = text[idx + "\nHint:".len()..].trim().to_string();
        return (text[..idx].to_string(), Some(hint));
    }

    let path = ctx
        .library_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "the library file".to_string());
    let hint = match err.downcast_ref::<ShelfError>() {
        Some(ShelfError::Corrupt(_)) => Some(format!(
            "Repair or move {} aside; a missing file starts an empty library.",
            path
        )),
        Some(ShelfError::Storage(_)) => Some(format!(
            "Check that {} and its directory are readable and writable.",
            path
        )),
        _ => None,
    };
    (text, hint)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Completions(args)) => return misc::handle_completions(args),
        None if !ctx.ui_context(false, None).is_interactive() => {
            misc::print_quickstart();
            return Ok(());
        }
        _ => {}
    }

    let mut catalog = ctx.open_catalog()?;
    match &cli.command {
        Some(Commands::Add(args)) => add::handle_add(ctx, &mut catalog, args),
        Some(Commands::Remove(args)) => remove::handle_remove(ctx, &mut catalog, args),
        Some(Commands::Search(args)) => search::handle_search(ctx, &mut catalog, args),
        Some(Commands::List(args)) => list::handle_list(ctx, &mut catalog, args),
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, &mut catalog, args),
        Some(Commands::Menu) | None => menu::handle_menu(ctx, &mut catalog),
        Some(Commands::Completions(_)) => Ok(()),
    }
}
