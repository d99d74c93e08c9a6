//! Core data types for the catalog.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a book when it is added.
pub type BookId = u64;

/// Lowest publication year accepted by the input forms.
pub const MIN_PUBLICATION_YEAR: i32 = 0;

/// Highest publication year accepted by the input forms.
pub const MAX_PUBLICATION_YEAR: i32 = 3000;

/// A book record as stored in the library file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, never reissued after removal
    pub id: BookId,

    pub title: String,

    pub author: String,

    pub publication_year: i32,

    pub genre: String,

    /// Whether the book has been read
    pub read_status: bool,
}

/// Builder for creating new books.
///
/// The id is assigned by the library on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    pub read_status: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: String::new(),
            read_status: false,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_read_status(mut self, read_status: bool) -> Self {
        self.read_status = read_status;
        self
    }

    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre: self.genre,
            read_status: self.read_status,
        }
    }
}

/// Returns true when `year` is within the range the input forms accept.
pub fn is_valid_publication_year(year: i32) -> bool {
    (MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(&year)
}
