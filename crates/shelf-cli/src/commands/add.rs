use shelf_core::Command;

use crate::app::{AppContext, FileCatalog};
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::draft_from_args;
use crate::output::{BookListView, ADDED_MESSAGE};
use crate::ui::prompt::book_form;

use super::execute_and_render;

pub fn handle_add(
    ctx: &AppContext,
    catalog: &mut FileCatalog,
    args: &AddArgs,
) -> anyhow::Result<()> {
    let draft = draft_from_args(args);
    if args.no_input && !draft.is_complete() {
        return Err(CliError::invalid_input_with_hint(
            "Title, author and year are required with --no-input",
            "shelf add --title <TITLE> --author <AUTHOR> --year <YEAR>",
        )
        .into());
    }

    let book = book_form(draft)?;
    let ui_ctx = ctx.ui_context(false, None);
    let view = BookListView::new("add", ADDED_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Add(book), &ui_ctx, &view)?;
    Ok(())
}
