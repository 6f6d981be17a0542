//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows to domain types.

use bookshelf_core::catalog::{Author, Book};
use rusqlite::Row;

/// Convert a SQLite row to an Author.
///
/// Expected columns: id, name
pub fn row_to_author(row: &Row) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Convert a SQLite row to a Book.
///
/// Expected columns: id, title, author_id
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author_id: row.get(2)?,
    })
}
