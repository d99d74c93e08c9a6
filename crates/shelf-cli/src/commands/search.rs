use shelf_core::{Command, GenreFilter, ReadFilter, SearchQuery, SortKey};

use crate::app::{AppContext, FileCatalog};
use crate::cli::SearchArgs;
use crate::helpers::{parse_output_format, search_from_args};
use crate::output::{BookListView, NO_MATCHES_MESSAGE};

use super::{execute_and_render, library_display};

pub fn handle_search(
    ctx: &AppContext,
    catalog: &mut FileCatalog,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let (query, sort) = search_from_args(args)?;
    let ui_ctx = ctx.ui_context(args.json, format);

    let view = BookListView::new("search", NO_MATCHES_MESSAGE)
        .context(Some(describe_search(&query, sort)))
        .path(library_display(ctx))
        .quiet(ctx.quiet());
    execute_and_render(catalog, Command::Search { query, sort }, &ui_ctx, &view)?;
    Ok(())
}

/// Header context for a search, e.g. `"dune", genre: Sci-Fi, unread, by year`.
pub(crate) fn describe_search(query: &SearchQuery, sort: SortKey) -> String {
    let mut parts = Vec::new();
    if !query.term.is_empty() {
        parts.push(format!("\"{}\"", query.term));
    }
    if let GenreFilter::Named(genre) = &query.genre {
        parts.push(format!("genre: {}", genre));
    }
    if query.read != ReadFilter::All {
        parts.push(query.read.label().to_lowercase());
    }
    parts.push(format!("by {}", sort.name()));
    parts.join(", ")
}
