use shelf_core::Command;

use crate::app::{AppContext, FileCatalog};
use crate::cli::StatsArgs;
use crate::output::{BookListView, EMPTY_LIBRARY_MESSAGE};

use super::execute_and_render;

pub fn handle_stats(
    ctx: &AppContext,
    catalog: &mut FileCatalog,
    args: &StatsArgs,
) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let view = BookListView::new("stats", EMPTY_LIBRARY_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Statistics, &ui_ctx, &view)?;
    Ok(())
}
