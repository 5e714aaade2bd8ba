use std::time::Duration;

use async_trait::async_trait;
use bookshelf_kernel::settings::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::models::{Author, Book, BookId, NewBook};
use crate::store::{BookStore, StoreError, StoreResult};

/// Columns of `books`, in the order rows are decoded.
type BookRow = (i64, String, String, String);

const SELECT_ALL: &str = "SELECT id::BIGINT, title, author_name, author_last_name
     FROM books
     ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id::BIGINT, title, author_name, author_last_name
     FROM books
     WHERE id = $1";

const INSERT: &str = "INSERT INTO books (title, author_name, author_last_name)
     VALUES ($1, $2, $3)
     RETURNING id::BIGINT";

const UPDATE: &str = "UPDATE books
     SET title = $1, author_name = $2, author_last_name = $3
     WHERE id = $4";

const DELETE: &str = "DELETE FROM books WHERE id = $1";

fn into_book((id, title, first_name, last_name): BookRow) -> Book {
    Book {
        id: BookId(id),
        title,
        author: Author {
            first_name,
            last_name,
        },
    }
}

/// [`BookStore`] backed by the Postgres `books` table.
#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and make sure the database answers.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .connect(&settings.url)
            .await?;

        let store = Self::new(pool);
        store.ping().await?;

        info!(
            url = %settings.redacted_url(),
            max_connections = settings.max_connections,
            "connected to book database"
        );
        Ok(store)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_all(&self) -> StoreResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(rows.into_iter().map(into_book).collect())
    }

    async fn get_by_id(&self, id: BookId) -> StoreResult<Book> {
        sqlx::query_as::<_, BookRow>(SELECT_BY_ID)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?
            .map(into_book)
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, book: NewBook) -> StoreResult<BookId> {
        let (id,): (i64,) = sqlx::query_as(INSERT)
            .bind(&book.title)
            .bind(&book.author.first_name)
            .bind(&book.author.last_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(BookId(id))
    }

    async fn update(&self, book: &Book) -> StoreResult<()> {
        let result = sqlx::query(UPDATE)
            .bind(&book.title)
            .bind(&book.author.first_name)
            .bind(&book.author.last_name)
            .bind(book.id.0)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(book.id));
        }
        Ok(())
    }

    async fn remove(&self, id: BookId) -> StoreResult<()> {
        let result = sqlx::query(DELETE).bind(id.0).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
