use clap::CommandFactory;
use clap_complete::generate;

use shelf_core::VERSION;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "shelf", &mut std::io::stdout());
    Ok(())
}

/// Printed by a bare `shelf` when there is no terminal to run the menu on.
pub fn print_quickstart() {
    println!("Shelf v{}", VERSION);
    println!("\nQuickstart:");
    println!("  shelf add --title \"Dune\" --author \"Frank Herbert\" --year 1965 --genre Sci-Fi");
    println!("  shelf list");
    println!("  shelf search dune --status unread --sort year");
    println!("  shelf remove <id>");
    println!("  shelf stats");
    println!("  shelf menu    (interactive, needs a terminal)");
    println!("\nRun `shelf --help` for full usage.");
}
