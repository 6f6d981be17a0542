//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.
//!
//! List queries order by id; storage default order is not relied on.

/// SQL statements to configure the connection and create all tables.
///
/// `foreign_keys` is per-connection and off by default in SQLite; the
/// repository owns a single connection, so enabling it here covers every
/// query. Author names carry no UNIQUE constraint - uniqueness is checked
/// at the API layer before insert.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Authors table
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Books table
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author_id INTEGER NOT NULL,
    FOREIGN KEY (author_id) REFERENCES authors(id)
);

-- Index for the books-by-author query
CREATE INDEX IF NOT EXISTS idx_books_author_id ON books(author_id);
"#;

// Author queries
pub const INSERT_AUTHOR: &str = r#"
INSERT INTO authors (name)
VALUES (?1)
"#;

pub const SELECT_AUTHOR_BY_ID: &str = r#"
SELECT id, name
FROM authors
WHERE id = ?1
"#;

pub const SELECT_AUTHOR_BY_NAME: &str = r#"
SELECT id, name
FROM authors
WHERE name = ?1
"#;

pub const SELECT_AUTHORS: &str = r#"
SELECT id, name
FROM authors
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

// Book queries
pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author_id)
VALUES (?1, ?2)
"#;

pub const SELECT_BOOKS: &str = r#"
SELECT id, title, author_id
FROM books
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const SELECT_BOOKS_BY_AUTHOR: &str = r#"
SELECT id, title, author_id
FROM books
WHERE author_id = ?1
ORDER BY id ASC
LIMIT ?2 OFFSET ?3
"#;
