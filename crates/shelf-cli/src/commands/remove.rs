use shelf_core::Command;

use crate::app::{AppContext, FileCatalog};
use crate::cli::RemoveArgs;
use crate::errors::CliError;
use crate::output::{BookListView, NOTHING_TO_REMOVE_MESSAGE};
use crate::ui::prompt::select_book;
use crate::ui::{notice, print};

use super::execute_and_render;

pub fn handle_remove(
    ctx: &AppContext,
    catalog: &mut FileCatalog,
    args: &RemoveArgs,
) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    let id = match args.id {
        Some(id) => id,
        None if args.no_input => {
            return Err(CliError::invalid_input_with_hint(
                "A book ID is required with --no-input",
                "Run `shelf list` to find book IDs.",
            )
            .into());
        }
        None if catalog.books().is_empty() => {
            print(&ui_ctx, &notice(&ui_ctx, NOTHING_TO_REMOVE_MESSAGE));
            return Ok(());
        }
        None => match select_book("Book to remove", catalog.books())? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let view = BookListView::new("remove", NOTHING_TO_REMOVE_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Remove(id), &ui_ctx, &view)?;
    Ok(())
}
