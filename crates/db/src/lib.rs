//! Book storage for bookshelf.
//!
//! [`BookStore`] is the boundary between the HTTP handlers and persistence.
//! [`PgBookStore`] talks to the `books` table over a `sqlx` pool and
//! [`MemoryBookStore`] keeps everything in process.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

use std::sync::Arc;

use anyhow::Context;
use bookshelf_kernel::settings::{DatabaseSettings, StorageBackend};

pub use memory::MemoryBookStore;
pub use models::{Author, Book, BookId, NewBook};
pub use postgres::PgBookStore;
pub use store::{BookStore, BookStoreArc, StoreError, StoreResult};

/// Build the store selected by `database.backend`.
///
/// For Postgres this connects and pings the database; an unreachable
/// database is an error the caller is expected to treat as fatal.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<BookStoreArc> {
    match settings.backend {
        StorageBackend::Postgres => {
            let store = PgBookStore::connect(settings).await.with_context(|| {
                format!("failed to connect to {}", settings.redacted_url())
            })?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!(target: "bookshelf-db", "using in-memory book store; data is lost on exit");
            Ok(Arc::new(MemoryBookStore::new()))
        }
    }
}
