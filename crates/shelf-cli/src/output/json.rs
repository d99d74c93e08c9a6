//! JSON output for books and statistics.

use shelf_core::{Book, Statistics};

/// Convert a book to JSON for output.
pub fn book_json(book: &Book) -> serde_json::Value {
    serde_json::json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
        "publication_year": book.publication_year,
        "genre": book.genre,
        "read_status": book.read_status,
    })
}

pub fn books_json(books: &[Book]) -> serde_json::Value {
    serde_json::Value::Array(books.iter().map(book_json).collect())
}

/// Statistics with the rounded percentage the text output shows.
pub fn statistics_json(stats: &Statistics) -> serde_json::Value {
    serde_json::json!({
        "total_books": stats.total,
        "books_read": stats.read,
        "percent_read": (stats.percent_read * 100.0).round() / 100.0,
    })
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
