//! The in-memory book store and the catalog session that persists it.
//!
//! `Library` is the pure store: an ordered list of books plus the id counter.
//! `Catalog` pairs a library with a storage backend and saves after every
//! mutation.

use log::{debug, info, warn};

use crate::error::{Result, ShelfError};
use crate::query::{self, SearchQuery, Statistics};
use crate::storage::{Book, BookId, NewBook, StorageEngine};

/// Ordered collection of books for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    next_id: BookId,
    books: Vec<Book>,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            books: Vec::new(),
        }
    }

    /// Rebuild a library from persisted parts.
    ///
    /// A missing or stale counter is raised past the largest stored id so
    /// that ids handed out later never collide with existing ones.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Corrupt` if a stored id is the largest possible
    /// id, since no counter value can follow it.
    pub fn from_parts(next_id: Option<BookId>, books: Vec<Book>) -> Result<Self> {
        let largest = books.iter().map(|book| book.id).max().unwrap_or(0);
        let floor = largest.checked_add(1).ok_or_else(|| {
            ShelfError::Corrupt(format!("book id {} leaves no room for new ids", largest))
        })?;
        let next_id = next_id.map_or(floor, |stored| stored.max(floor));
        Ok(Self { next_id, books })
    }

    /// Append a book, assigning it the next id.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` when the id counter is exhausted.
    /// The library is unchanged in that case.
    pub fn add(&mut self, book: NewBook) -> Result<&Book> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| ShelfError::InvalidInput("No book ids left to assign".to_string()))?;
        self.books.push(book.into_book(id));
        Ok(&self.books[self.books.len() - 1])
    }

    /// Remove the first book with `id`. Unknown ids leave the library unchanged.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The id the next added book will receive.
    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    /// Distinct non-empty genres in first-seen order.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for book in &self.books {
            if !book.genre.is_empty() && !genres.contains(&book.genre) {
                genres.push(book.genre.clone());
            }
        }
        genres
    }
}

/// A library bound to the storage backend it was loaded from.
///
/// Every mutation writes the full library back before returning.
pub struct Catalog<S: StorageEngine> {
    storage: S,
    library: Library,
}

impl<S: StorageEngine> Catalog<S> {
    /// Load the library from `storage`.
    pub fn open(storage: S) -> Result<Self> {
        let library = storage.load()?;
        debug!(
            "event=catalog_open books={} next_id={}",
            library.len(),
            library.next_id()
        );
        Ok(Self { storage, library })
    }

    /// Add a book and save. Returns the stored record.
    ///
    /// The change is applied to a copy; the session only sees it once the
    /// save succeeded.
    pub fn add(&mut self, book: NewBook) -> Result<Book> {
        let mut staged = self.library.clone();
        let added = staged.add(book)?.clone();
        self.commit(staged)?;
        info!("event=book_added id={}", added.id);
        Ok(added)
    }

    /// Remove a book by id and save, whether or not it was present.
    pub fn remove(&mut self, id: BookId) -> Result<Option<Book>> {
        let mut staged = self.library.clone();
        let removed = staged.remove(id);
        self.commit(staged)?;
        info!("event=book_removed id={} found={}", id, removed.is_some());
        Ok(removed)
    }

    fn commit(&mut self, staged: Library) -> Result<()> {
        if let Err(err) = self.storage.save(&staged) {
            warn!("event=save_failed books={} error={}", staged.len(), err);
            return Err(err);
        }
        self.library = staged;
        Ok(())
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.library.get(id)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Book> {
        query::search(self.library.books(), query)
    }

    pub fn statistics(&self) -> Statistics {
        query::statistics(self.library.books())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
