use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::storage::{BookId, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
use shelf_core::VERSION;

/// Shelf - A personal library catalog in a single JSON file
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, global = true, env = "SHELF_PATH")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args, Default)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Book author
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(
        long,
        value_parser = clap::value_parser!(i32)
            .range(MIN_PUBLICATION_YEAR as i64..=MAX_PUBLICATION_YEAR as i64)
    )]
    pub year: Option<i32>,

    /// Genre (free text)
    #[arg(long)]
    pub genre: Option<String>,

    /// Mark the book as read
    #[arg(long)]
    pub read: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `remove` command
#[derive(Args, Default)]
pub struct RemoveArgs {
    /// Book ID (omit to pick from a list)
    #[arg(value_name = "ID")]
    pub id: Option<BookId>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `search` command
#[derive(Args, Default)]
pub struct SearchArgs {
    /// Text matched against title, author, genre and year
    #[arg(value_name = "TERM")]
    pub term: Option<String>,

    /// Filter by genre ("All" for any)
    #[arg(long)]
    pub genre: Option<String>,

    /// Filter by read status (all, read, unread)
    #[arg(long)]
    pub status: Option<String>,

    /// Sort order (title, year, year-desc)
    #[arg(long)]
    pub sort: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args, Default)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args, Default)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the library
    Add(AddArgs),

    /// Remove a book by ID
    Remove(RemoveArgs),

    /// Search books by text, genre and read status
    Search(SearchArgs),

    /// Display all books
    List(ListArgs),

    /// Show library statistics
    Stats(StatsArgs),

    /// Open the interactive menu
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
