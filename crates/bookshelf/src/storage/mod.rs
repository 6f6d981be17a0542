//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the repository
//! traits defined in `bookshelf_core::storage`. The catalog ships a single
//! backend: SQLite via `rusqlite` and `tokio-rusqlite`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
