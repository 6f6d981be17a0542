//! Book CRUD handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use bookshelf_core::storage::Page;

use crate::{
    handlers::AppError,
    models::{Book, CreateBook, Pagination},
    state::AppState,
};

/// List books (GET /books/).
pub async fn list_books(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.list_books(pagination.into(), None).await?;

    Ok(Json(books.into_iter().map(Book::from).collect()))
}

/// List books for one author (GET /books/{author_id}/).
///
/// An empty result yields 404; an unknown author and an author with no
/// books are indistinguishable here.
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state
        .books
        .list_books(Page::default(), Some(author_id))
        .await?;

    if books.is_empty() {
        return Err(AppError::NotFound("Books not found"));
    }

    Ok(Json(books.into_iter().map(Book::from).collect()))
}

/// Create a new book (POST /books/).
///
/// The author reference is enforced by the schema's foreign key; an
/// unknown `author_id` surfaces as a 400.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> Result<Json<Book>, AppError> {
    let book = state.books.create_book(&payload.into_new_book()).await?;

    tracing::info!(book_id = book.id, author_id = book.author_id, title = %book.title, "Created new book");

    Ok(Json(book.into()))
}
