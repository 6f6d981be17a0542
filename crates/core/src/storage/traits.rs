use async_trait::async_trait;

use crate::catalog::{Author, Book, NewAuthor, NewBook};

use super::{Page, Result};

/// Repository for author operations.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Gets an author by id. Returns `None` if no author matches.
    async fn get_author(&self, id: i64) -> Result<Option<Author>>;

    /// Gets an author by exact (case-sensitive) name.
    ///
    /// Used as the pre-insert uniqueness check before `create_author`.
    async fn get_author_by_name(&self, name: &str) -> Result<Option<Author>>;

    /// Lists authors within the given window, ordered by id.
    async fn list_authors(&self, page: Page) -> Result<Vec<Author>>;

    /// Inserts a new author and returns the persisted entity with its
    /// generated id.
    async fn create_author(&self, author: &NewAuthor) -> Result<Author>;
}

/// Repository for book operations.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists books within the given window, ordered by id. When `author_id`
    /// is given only that author's books are returned.
    async fn list_books(&self, page: Page, author_id: Option<i64>) -> Result<Vec<Book>>;

    /// Inserts a new book and returns the persisted entity with its
    /// generated id.
    async fn create_book(&self, book: &NewBook) -> Result<Book>;
}
