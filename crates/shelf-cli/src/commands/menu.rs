//! Interactive menu loop over the five catalog actions.

use log::{debug, warn};

use shelf_core::{Action, Command, ShelfError};

use crate::app::{AppContext, FileCatalog};
use crate::errors::CliError;
use crate::output::{
    BookListView, ADDED_MESSAGE, EMPTY_LIBRARY_MESSAGE, NOTHING_TO_REMOVE_MESSAGE,
    NO_MATCHES_MESSAGE,
};
use crate::ui::prompt::{book_form, search_form, select_action, select_book, BookDraft};
use crate::ui::render::error_message;
use crate::ui::{blank_line, header, notice, print, UiContext};

use super::search::describe_search;
use super::{execute_and_render, library_display};

type MenuHandler = fn(&AppContext, &UiContext, &mut FileCatalog) -> anyhow::Result<()>;

/// Handler for each menu action.
fn handler_for(action: Action) -> MenuHandler {
    match action {
        Action::Add => menu_add,
        Action::Remove => menu_remove,
        Action::Search => menu_search,
        Action::DisplayAll => menu_list,
        Action::Statistics => menu_stats,
    }
}

/// A library that could not be written is fatal; anything else is reported
/// and the menu carries on.
fn ends_session(action: Action, err: &anyhow::Error) -> bool {
    action.mutates() && matches!(err.downcast_ref::<ShelfError>(), Some(ShelfError::Storage(_)))
}

pub fn handle_menu(ctx: &AppContext, catalog: &mut FileCatalog) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    if !ui_ctx.is_interactive() {
        return Err(CliError::invalid_input_with_hint(
            "The menu needs an interactive terminal",
            "Use the subcommands instead, e.g. `shelf list`.",
        )
        .into());
    }

    print(
        &ui_ctx,
        &header(&ui_ctx, "menu", None, library_display(ctx).as_deref()),
    );
    blank_line(&ui_ctx);

    while let Some(action) = select_action()? {
        debug!("event=menu_action action={}", action.name());
        if let Err(err) = handler_for(action)(ctx, &ui_ctx, catalog) {
            if ends_session(action, &err) {
                return Err(err);
            }
            warn!("event=menu_action_failed action={} error={}", action.name(), err);
            eprintln!("{}", error_message(&ui_ctx, &err.to_string(), None));
        }
        blank_line(&ui_ctx);
    }
    Ok(())
}

fn menu_add(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    catalog: &mut FileCatalog,
) -> anyhow::Result<()> {
    let book = book_form(BookDraft::default())?;
    let view = BookListView::new("add", ADDED_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Add(book), ui_ctx, &view)
}

fn menu_remove(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    catalog: &mut FileCatalog,
) -> anyhow::Result<()> {
    if catalog.books().is_empty() {
        print(ui_ctx, &notice(ui_ctx, NOTHING_TO_REMOVE_MESSAGE));
        return Ok(());
    }
    let Some(id) = select_book("Book to remove", catalog.books())? else {
        return Ok(());
    };
    let view = BookListView::new("remove", NOTHING_TO_REMOVE_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Remove(id), ui_ctx, &view)
}

fn menu_search(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    catalog: &mut FileCatalog,
) -> anyhow::Result<()> {
    let (query, sort) = search_form(&catalog.library().genres())?;
    let view = BookListView::new("search", NO_MATCHES_MESSAGE)
        .context(Some(describe_search(&query, sort)))
        .quiet(ctx.quiet());
    execute_and_render(catalog, Command::Search { query, sort }, ui_ctx, &view)
}

fn menu_list(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    catalog: &mut FileCatalog,
) -> anyhow::Result<()> {
    let view = BookListView::new("list", EMPTY_LIBRARY_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::DisplayAll, ui_ctx, &view)
}

fn menu_stats(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    catalog: &mut FileCatalog,
) -> anyhow::Result<()> {
    let view = BookListView::new("stats", EMPTY_LIBRARY_MESSAGE).quiet(ctx.quiet());
    execute_and_render(catalog, Command::Statistics, ui_ctx, &view)
}
