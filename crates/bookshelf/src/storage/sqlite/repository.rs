//! SQLite repository implementation.
//!
//! Implements the repository traits from `bookshelf_core::storage` using
//! SQLite. Every query runs inside `conn.call`, which executes the closure
//! on the connection's background thread and releases it on all paths.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookshelf_core::catalog::{Author, Book, NewAuthor, NewBook};
use bookshelf_core::storage::{AuthorRepository, BookRepository, Page, RepositoryError, Result};

use super::conversions::{row_to_author, row_to_book};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for authors and books.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// AuthorRepository implementation
// ============================================================================

#[async_trait]
impl AuthorRepository for SqliteRepository {
    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_AUTHOR_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_author) {
                    Ok(author) => Ok(Some(author)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author", id.to_string()))
    }

    async fn get_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        let name = name.to_string();
        let name_for_err = name.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_AUTHOR_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name], row_to_author) {
                    Ok(author) => Ok(Some(author)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author", name_for_err))
    }

    async fn list_authors(&self, page: Page) -> Result<Vec<Author>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_AUTHORS).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([page.limit, page.skip], row_to_author)
                    .map_err(wrap_err)?;

                let mut authors = Vec::new();
                for row_result in rows {
                    authors.push(row_result.map_err(wrap_err)?);
                }
                Ok(authors)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let name = author.name.clone();
        let name_for_err = author.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_AUTHOR, [&name])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Author { id, name })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author", name_for_err))
    }
}

// ============================================================================
// BookRepository implementation
// ============================================================================

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn list_books(&self, page: Page, author_id: Option<i64>) -> Result<Vec<Book>> {
        self.conn
            .call(move |conn| {
                let mut books = Vec::new();

                match author_id {
                    Some(author_id) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_BOOKS_BY_AUTHOR)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map([author_id, page.limit, page.skip], row_to_book)
                            .map_err(wrap_err)?;
                        for row_result in rows {
                            books.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_BOOKS).map_err(wrap_err)?;
                        let rows = stmt
                            .query_map([page.limit, page.skip], row_to_book)
                            .map_err(wrap_err)?;
                        for row_result in rows {
                            books.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }

                Ok(books)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let title = book.title.clone();
        let author_id = book.author_id;
        let title_for_err = book.title.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_BOOK,
                    rusqlite::params![title, author_id],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Book {
                    id,
                    title,
                    author_id,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book", title_for_err))
    }
}
