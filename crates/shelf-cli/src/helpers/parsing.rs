//! Turn raw command-line values into core query and book types.

use shelf_core::{GenreFilter, ReadFilter, SearchQuery, SortKey};

use crate::cli::{AddArgs, SearchArgs};
use crate::errors::CliError;
use crate::ui::prompt::BookDraft;
use crate::ui::OutputFormat;

/// Parse `--format`, rejecting it when combined with `--json`.
pub fn parse_output_format(
    json: bool,
    format: Option<&str>,
) -> anyhow::Result<Option<OutputFormat>> {
    match format {
        None => Ok(None),
        Some(_) if json => {
            Err(CliError::invalid_input("--format cannot be used with --json").into())
        }
        Some(value) => Ok(Some(value.parse::<OutputFormat>()?)),
    }
}

/// Build the query and sort order for `shelf search`.
///
/// Missing flags fall back to an unfiltered, title-sorted search.
pub fn search_from_args(args: &SearchArgs) -> anyhow::Result<(SearchQuery, SortKey)> {
    let genre = match args.genre.as_deref() {
        None | Some("") => GenreFilter::All,
        Some(value) => value.parse::<GenreFilter>()?,
    };
    let read = match args.status.as_deref() {
        None => ReadFilter::All,
        Some(value) => value.parse::<ReadFilter>()?,
    };
    let sort = match args.sort.as_deref() {
        None => SortKey::default(),
        Some(value) => value.parse::<SortKey>()?,
    };
    let term = args.term.clone().unwrap_or_default();

    Ok((SearchQuery::new().term(term).genre(genre).read(read), sort))
}

/// Collect the `add` flags into a draft for the book form.
///
/// Text flags are kept exactly as given, empty strings included. With every
/// required field given, the genre defaults to empty and the read
/// status to the `--read` flag, so no prompt is needed.
pub fn draft_from_args(args: &AddArgs) -> BookDraft {
    let mut draft = BookDraft {
        title: args.title.clone(),
        author: args.author.clone(),
        year: args.year,
        genre: args.genre.clone(),
        read: args.read.then_some(true),
    };
    if draft.is_complete() {
        draft.genre.get_or_insert_with(String::new);
        draft.read.get_or_insert(false);
    }
    draft
}
