use axum::{routing::get, Router};
use bookshelf_db::BookStoreArc;

use super::handlers;

/// Books routes with the store bound as state.
pub fn router(store: BookStoreArc) -> Router {
    Router::new()
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/book/{id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .route(
            "/book",
            get(handlers::missing_id)
                .put(handlers::missing_id)
                .delete(handlers::missing_id),
        )
        .route(
            "/book/",
            get(handlers::missing_id)
                .put(handlers::missing_id)
                .delete(handlers::missing_id),
        )
        .with_state(store)
}
