//! JSON file storage backend.
//!
//! The library is stored as a pretty-printed (4-space indent) JSON document:
//!
//! ```json
//! {
//!     "next_id": 3,
//!     "books": [ { "id": 1, "title": "...", ... } ]
//! }
//! ```
//!
//! Files written as a bare array of books are still accepted; the id counter
//! is then derived from the largest stored id.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{Result, ShelfError};
use crate::fs::write_atomic;
use crate::library::Library;
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Book, BookId};

const INDENT: &[u8] = b"    ";

#[derive(Serialize)]
struct LibraryFileRef<'a> {
    next_id: BookId,
    books: &'a [Book],
}

#[derive(Deserialize)]
struct LibraryFile {
    #[serde(default)]
    next_id: Option<BookId>,
    books: Vec<Book>,
}

/// Library persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageEngine for JsonFileStorage {
    fn load(&self) -> Result<Library> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=library_missing path={} action=start_empty",
                    self.path.display()
                );
                return Ok(Library::new());
            }
            Err(err) => {
                return Err(ShelfError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let library = decode_library(&contents).map_err(|e| match e {
            ShelfError::Corrupt(detail) => {
                ShelfError::Corrupt(format!("{}: {}", self.path.display(), detail))
            }
            other => other,
        })?;
        debug!(
            "event=library_loaded path={} books={}",
            self.path.display(),
            library.len()
        );
        Ok(library)
    }

    fn save(&self, library: &Library) -> Result<()> {
        let bytes = encode_library(library)?;
        write_atomic(&self.path, &bytes)?;
        info!(
            "event=library_saved path={} books={} bytes={}",
            self.path.display(),
            library.len(),
            bytes.len()
        );
        Ok(())
    }
}

/// Serialize a library into the on-disk representation.
pub fn encode_library(library: &Library) -> Result<Vec<u8>> {
    let file = LibraryFileRef {
        next_id: library.next_id(),
        books: library.books(),
    };
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    file.serialize(&mut serializer)
        .map_err(|e| ShelfError::Storage(format!("Failed to serialize library: {}", e)))?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parse the on-disk representation (envelope or legacy bare array).
pub fn decode_library(contents: &str) -> Result<Library> {
    let value: Value = serde_json::from_str(contents)?;
    match value {
        Value::Array(_) => {
            let books: Vec<Book> = serde_json::from_value(value)?;
            Library::from_parts(None, books)
        }
        Value::Object(_) => {
            let file: LibraryFile = serde_json::from_value(value)?;
            Library::from_parts(file.next_id, file.books)
        }
        other => Err(ShelfError::Corrupt(format!(
            "expected a JSON object or array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
