//! Command handlers.
//!
//! Each handler turns its arguments into a core `Command`, executes it
//! against the session catalog, and renders the outcome.

pub mod add;
pub mod list;
pub mod menu;
pub mod misc;
pub mod remove;
pub mod search;
pub mod stats;

use shelf_core::Command;

use crate::app::{AppContext, FileCatalog};
use crate::output::{render_outcome, BookListView};
use crate::ui::UiContext;

/// Execute `command` and render its outcome.
pub(crate) fn execute_and_render(
    catalog: &mut FileCatalog,
    command: Command,
    ui_ctx: &UiContext,
    view: &BookListView<'_>,
) -> anyhow::Result<()> {
    let outcome = command.execute(catalog)?;
    render_outcome(ui_ctx, &outcome, view)
}

/// Library path as shown in headers.
pub(crate) fn library_display(ctx: &AppContext) -> Option<String> {
    ctx.library_path()
        .ok()
        .map(|path| path.display().to_string())
}
