//! Output formatting for books and statistics.
//!
//! JSON output is built here so that every command emits the same shapes;
//! table and plain rendering goes through the `ui` primitives.

pub mod json;
mod text;

use shelf_core::Outcome;

use crate::ui::{notice, print, receipt, UiContext};

pub use text::{print_book_list, print_statistics, BookListView};

pub const ADDED_MESSAGE: &str = "Book added successfully!";
pub const REMOVED_MESSAGE: &str = "Book removed successfully!";
pub const NOTHING_TO_REMOVE_MESSAGE: &str = "No books available to remove.";
pub const NO_MATCHES_MESSAGE: &str = "No matching books found.";
pub const EMPTY_LIBRARY_MESSAGE: &str = "Library is empty.";

/// Render whatever a catalog command produced.
///
/// `view` only matters for outcomes that carry a list of books.
pub fn render_outcome(
    ctx: &UiContext,
    outcome: &Outcome,
    view: &BookListView<'_>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        let value = match outcome {
            Outcome::Added(book) => json::book_json(book),
            Outcome::Removed { id, removed } => serde_json::json!({
                "id": id,
                "removed": removed.is_some(),
            }),
            Outcome::Books(books) => json::books_json(books),
            Outcome::Statistics(stats) => json::statistics_json(stats),
        };
        return json::print_json(&value);
    }

    match outcome {
        Outcome::Added(book) => {
            if view.quiet {
                println!("{}", book.id);
            } else {
                let items = [("ID", book.id.to_string()), ("Title", book.title.clone())];
                print(ctx, &receipt(ctx, ADDED_MESSAGE, &items));
            }
        }
        Outcome::Removed {
            removed: Some(book),
            ..
        } => {
            if !view.quiet {
                let items = [("ID", book.id.to_string()), ("Title", book.title.clone())];
                print(ctx, &receipt(ctx, REMOVED_MESSAGE, &items));
            }
        }
        Outcome::Removed { id, removed: None } => {
            print(ctx, &notice(ctx, &format!("No book with id {}", id)));
        }
        Outcome::Books(books) => print_book_list(ctx, view, books),
        Outcome::Statistics(stats) => print_statistics(ctx, stats, view.quiet),
    }
    Ok(())
}
