//! Request handlers for the books resource.
//!
//! Bodies are read as raw bytes and decoded with `serde_json` so that a
//! malformed payload maps to the status each endpoint promises, whatever
//! the request's `Content-Type`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bookshelf_db::{Book, BookId, BookStoreArc, NewBook, StoreError};
use bookshelf_http::AppError;

fn parse_id(raw: &str) -> Result<BookId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid book id '{raw}'")))
}

/// Reads answer 404 for every storage failure, empty collections included.
fn lookup_failed(err: StoreError) -> AppError {
    AppError::not_found(err.to_string())
}

/// GET /books
pub async fn list_books(State(store): State<BookStoreArc>) -> Result<Json<Vec<Book>>, AppError> {
    let books = store.list_all().await.map_err(lookup_failed)?;
    Ok(Json(books))
}

/// GET /book/{id}
pub async fn get_book(
    State(store): State<BookStoreArc>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id)?;
    let book = store.get_by_id(id).await.map_err(lookup_failed)?;
    Ok(Json(book))
}

/// POST /books
///
/// Any `id` in the body is ignored; the store assigns one and the response
/// points at it through `Location`.
pub async fn create_book(
    State(store): State<BookStoreArc>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let draft: NewBook = serde_json::from_slice(&body)
        .map_err(|err| AppError::bad_request(format!("invalid book payload: {err}")))?;

    let id = store.insert(draft).await.map_err(|err| AppError::Internal(err.into()))?;
    tracing::info!(book_id = %id, "book created");

    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/book/{id}"))]))
}

/// PUT /book/{id}
///
/// A malformed body answers 500 here, unlike create.
pub async fn update_book(
    State(store): State<BookStoreArc>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let draft: NewBook = serde_json::from_slice(&body)
        .map_err(|err| AppError::internal(format!("invalid book payload: {err}")))?;

    store.update(&draft.with_id(id)).await?;
    tracing::info!(book_id = %id, "book updated");

    Ok(StatusCode::OK)
}

/// DELETE /book/{id}
pub async fn delete_book(
    State(store): State<BookStoreArc>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    store.remove(id).await?;
    tracing::info!(book_id = %id, "book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// `/book` and `/book/` without an id
pub async fn missing_id() -> AppError {
    AppError::bad_request("book id is required")
}
