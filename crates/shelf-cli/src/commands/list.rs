use shelf_core::Command;

use crate::app::{AppContext, FileCatalog};
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::{BookListView, EMPTY_LIBRARY_MESSAGE};

use super::{execute_and_render, library_display};

pub fn handle_list(
    ctx: &AppContext,
    catalog: &mut FileCatalog,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, format);
    let view = BookListView::new("list", EMPTY_LIBRARY_MESSAGE)
        .path(library_display(ctx))
        .quiet(ctx.quiet());
    execute_and_render(catalog, Command::DisplayAll, &ui_ctx, &view)?;
    Ok(())
}
