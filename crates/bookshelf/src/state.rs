//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage
//! abstraction so handlers never touch the SQLite connection directly.

use std::sync::Arc;

use bookshelf_core::storage::{AuthorRepository, BookRepository};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler. All shared state lives in the
/// relational store behind the repository trait objects; there is no other
/// mutable in-process state.
#[derive(Clone)]
pub struct AppState {
    /// Author repository.
    pub authors: Arc<dyn AuthorRepository>,
    /// Book repository.
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    /// Creates AppState backed by the file-based SQLite repository.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

        Ok(Self {
            authors: repo.clone(),
            books: repo,
        })
    }

    /// Creates AppState backed by an in-memory SQLite database.
    ///
    /// Used by router tests - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = Arc::new(
            SqliteRepository::new_in_memory()
                .await
                .expect("failed to open in-memory database"),
        );

        Self {
            authors: repo.clone(),
            books: repo,
        }
    }
}
