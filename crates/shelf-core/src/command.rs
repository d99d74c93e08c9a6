//! Command dispatch for the five catalog actions.
//!
//! Front ends build a `Command`, hand it to `Command::execute` together with
//! the session's catalog, and render the returned `Outcome`. Nothing here
//! knows how the outcome is displayed.

use std::fmt;

use crate::error::Result;
use crate::library::Catalog;
use crate::query::{self, SearchQuery, SortKey, Statistics};
use crate::storage::{Book, BookId, NewBook, StorageEngine};

/// The actions offered by the catalog menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Remove,
    Search,
    DisplayAll,
    Statistics,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 5] = [
        Self::Add,
        Self::Remove,
        Self::Search,
        Self::DisplayAll,
        Self::Statistics,
    ];

    /// Stable machine name (matches the CLI subcommand).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Search => "search",
            Self::DisplayAll => "list",
            Self::Statistics => "stats",
        }
    }

    /// Human label shown in menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add a Book",
            Self::Remove => "Remove a Book",
            Self::Search => "Search Books",
            Self::DisplayAll => "Display All Books",
            Self::Statistics => "Library Statistics",
        }
    }

    /// Whether executing this action rewrites the library file.
    pub fn mutates(&self) -> bool {
        matches!(self, Self::Add | Self::Remove)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A request against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewBook),
    Remove(BookId),
    Search { query: SearchQuery, sort: SortKey },
    DisplayAll,
    Statistics,
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Book),
    /// `removed` is `None` when no book had the id
    Removed { id: BookId, removed: Option<Book> },
    Books(Vec<Book>),
    Statistics(Statistics),
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Self::Add(_) => Action::Add,
            Self::Remove(_) => Action::Remove,
            Self::Search { .. } => Action::Search,
            Self::DisplayAll => Action::DisplayAll,
            Self::Statistics => Action::Statistics,
        }
    }

    /// Run the command against `catalog`.
    pub fn execute<S: StorageEngine>(self, catalog: &mut Catalog<S>) -> Result<Outcome> {
        match self {
            Self::Add(book) => catalog.add(book).map(Outcome::Added),
            Self::Remove(id) => {
                let removed = catalog.remove(id)?;
                Ok(Outcome::Removed { id, removed })
            }
            Self::Search { query, sort } => {
                let mut books = catalog.search(&query);
                query::sort(&mut books, sort);
                Ok(Outcome::Books(books))
            }
            Self::DisplayAll => Ok(Outcome::Books(catalog.books().to_vec())),
            Self::Statistics => Ok(Outcome::Statistics(catalog.statistics())),
        }
    }
}
