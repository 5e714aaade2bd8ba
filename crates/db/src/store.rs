use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Book, BookId, NewBook};

/// Errors surfaced by a [`BookStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("book {0} not found")]
    NotFound(BookId),

    #[error("no books stored")]
    Empty,

    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// True for the "nothing there" outcomes, as opposed to backend failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::Empty)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary for books.
///
/// Every call is a single round trip; there are no retries and no
/// transactions spanning calls.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All stored books.
    ///
    /// Returns [`StoreError::Empty`] when there are none.
    async fn list_all(&self) -> StoreResult<Vec<Book>>;

    async fn get_by_id(&self, id: BookId) -> StoreResult<Book>;

    /// Stores a new book and returns the id the store assigned to it.
    async fn insert(&self, book: NewBook) -> StoreResult<BookId>;

    /// Replaces title and author of `book.id`.
    ///
    /// Returns [`StoreError::NotFound`] if no such book exists.
    async fn update(&self, book: &Book) -> StoreResult<()>;

    async fn remove(&self, id: BookId) -> StoreResult<()>;
}

/// Shared handle injected into the HTTP layer.
pub type BookStoreArc = Arc<dyn BookStore>;
