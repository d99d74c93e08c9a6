//! Argument parsing helpers shared by the command handlers.

mod parsing;

pub use parsing::{draft_from_args, parse_output_format, search_from_args};
