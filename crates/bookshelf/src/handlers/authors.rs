//! Author CRUD handlers.
//!
//! These handlers use repository trait objects for database access and
//! convert internal entities to wire models at the response boundary.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    handlers::AppError,
    models::{Author, CreateAuthor, Pagination},
    state::AppState,
};

/// List authors (GET /authors/).
pub async fn list_authors(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Author>>, AppError> {
    let authors = state.authors.list_authors(pagination.into()).await?;

    Ok(Json(authors.into_iter().map(Author::from).collect()))
}

/// Get a single author by id (GET /authors/{author_id}).
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<Json<Author>, AppError> {
    let author = state
        .authors
        .get_author(author_id)
        .await?
        .ok_or(AppError::NotFound("Author not found"))?;

    Ok(Json(author.into()))
}

/// Create a new author (POST /authors/).
///
/// Name uniqueness is checked here, not by the schema; two concurrent
/// creates with the same name can both pass this check.
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthor>,
) -> Result<Json<Author>, AppError> {
    let existing = state.authors.get_author_by_name(&payload.name).await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Such name for author already exists"));
    }

    let author = state
        .authors
        .create_author(&payload.into_new_author())
        .await?;

    tracing::info!(author_id = author.id, name = %author.name, "Created new author");

    Ok(Json(author.into()))
}
