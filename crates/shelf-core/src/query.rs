//! Query engine: filtering, sorting and statistics over a snapshot of books.
//!
//! All functions here are pure. They never mutate their input and preserve
//! the relative order of the books they keep.

use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;
use crate::storage::Book;

/// Genre restriction for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    /// Match this genre, case-insensitively
    Named(String),
}

impl GenreFilter {
    fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Named(genre) => book.genre.to_lowercase() == genre.to_lowercase(),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "All" {
            Ok(Self::All)
        } else {
            Ok(Self::Named(value.to_string()))
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Named(genre) => write!(f, "{}", genre),
        }
    }
}

/// Read-status restriction for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    pub const ALL: [ReadFilter; 3] = [Self::All, Self::Read, Self::Unread];

    fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Read => book.read_status,
            Self::Unread => !book.read_status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Read => "Read",
            Self::Unread => "Unread",
        }
    }
}

impl FromStr for ReadFilter {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "read" => Ok(Self::Read),
            "unread" => Ok(Self::Unread),
            _ => Err(ShelfError::InvalidInput(format!(
                "Unknown read status filter: {} (use all, read or unread)",
                value
            ))),
        }
    }
}

impl fmt::Display for ReadFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordering applied to search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Title A-Z
    #[default]
    Title,
    /// Publication year, oldest first
    YearAscending,
    /// Publication year, newest first
    YearDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Title, Self::YearAscending, Self::YearDescending];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title A-Z",
            Self::YearAscending => "Publication Year \u{2191}",
            Self::YearDescending => "Publication Year \u{2193}",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::YearAscending => "year",
            Self::YearDescending => "year-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "year" | "year-asc" => Ok(Self::YearAscending),
            "year-desc" => Ok(Self::YearDescending),
            _ => Err(ShelfError::InvalidInput(format!(
                "Unknown sort key: {} (use title, year or year-desc)",
                value
            ))),
        }
    }
}

/// Search parameters. Criteria compose as logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring matched against title, author, genre and year
    pub term: String,
    pub genre: GenreFilter,
    pub read: ReadFilter,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn genre(mut self, genre: GenreFilter) -> Self {
        self.genre = genre;
        self
    }

    pub fn read(mut self, read: ReadFilter) -> Self {
        self.read = read;
        self
    }

    fn matches_term(&self, book: &Book, term: &str) -> bool {
        term.is_empty()
            || book.title.to_lowercase().contains(term)
            || book.author.to_lowercase().contains(term)
            || book.genre.to_lowercase().contains(term)
            || book.publication_year.to_string().contains(term)
    }
}

/// Books matching every criterion in `query`, in their original order.
pub fn search(books: &[Book], query: &SearchQuery) -> Vec<Book> {
    let term = query.term.to_lowercase();
    books
        .iter()
        .filter(|book| query.matches_term(book, &term))
        .filter(|book| query.genre.matches(book))
        .filter(|book| query.read.matches(book))
        .cloned()
        .collect()
}

/// Stable sort of `books` by `key`.
pub fn sort(books: &mut [Book], key: SortKey) {
    match key {
        SortKey::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::YearAscending => books.sort_by_key(|book| book.publication_year),
        SortKey::YearDescending => {
            books.sort_by(|a, b| b.publication_year.cmp(&a.publication_year))
        }
    }
}

/// Aggregate counts for a set of books.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    /// Share of read books, 0.0 for an empty library
    pub percent_read: f64,
}

impl Statistics {
    /// `(total, percent_read)`
    pub fn summary(&self) -> (usize, f64) {
        (self.total, self.percent_read)
    }
}

pub fn statistics(books: &[Book]) -> Statistics {
    let total = books.len();
    let read = books.iter().filter(|book| book.read_status).count();
    let percent_read = if total == 0 {
        0.0
    } else {
        read as f64 / total as f64 * 100.0
    };
    Statistics {
        total,
        read,
        percent_read,
    }
}
