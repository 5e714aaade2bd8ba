use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Book, BookId, NewBook};
use crate::store::{BookStore, StoreError, StoreResult};

/// In-process [`BookStore`]. Ids come from a counter, so they never repeat.
#[derive(Debug)]
pub struct MemoryBookStore {
    books: RwLock<BTreeMap<BookId, Book>>,
    next_id: AtomicI64,
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a store holding `books`; new ids continue after the largest one.
    pub fn with_data(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|book| book.id.0).max().unwrap_or(0) + 1;
        Self {
            books: RwLock::new(books.into_iter().map(|book| (book.id, book)).collect()),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list_all(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.read().await;
        if books.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(books.values().cloned().collect())
    }

    async fn get_by_id(&self, id: BookId) -> StoreResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, book: NewBook) -> StoreResult<BookId> {
        let id = BookId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.books.write().await.insert(id, book.with_id(id));
        Ok(id)
    }

    async fn update(&self, book: &Book) -> StoreResult<()> {
        match self.books.write().await.get_mut(&book.id) {
            Some(stored) => {
                *stored = book.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(book.id)),
        }
    }

    async fn remove(&self, id: BookId) -> StoreResult<()> {
        self.books
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn draft(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: Author {
                first_name: "first".to_string(),
                last_name: "last".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_error() {
        let store = MemoryBookStore::new();
        assert!(matches!(store.list_all().await, Err(StoreError::Empty)));
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryBookStore::new();
        let first = store.insert(draft("one")).await.unwrap();
        let second = store.insert(draft("two")).await.unwrap();
        assert_ne!(first, second);

        let titles: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = MemoryBookStore::new();
        let id = store.insert(draft("before")).await.unwrap();

        store.update(&draft("after").with_id(id)).await.unwrap();

        let book = store.get_by_id(id).await.unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.title, "after");
    }

    #[tokio::test]
    async fn update_and_remove_of_unknown_id_are_not_found() {
        let store = MemoryBookStore::new();
        let missing = BookId(999);

        let err = store.update(&draft("x").with_id(missing)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == missing));

        let err = store.remove(missing).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_deletes_the_book() {
        let store = MemoryBookStore::new();
        let id = store.insert(draft("gone")).await.unwrap();

        store.remove(id).await.unwrap();

        assert!(matches!(store.get_by_id(id).await, Err(StoreError::NotFound(_))));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn with_data_continues_after_highest_id() {
        let store = MemoryBookStore::with_data(vec![draft("seeded").with_id(BookId(41))]);
        let id = store.insert(draft("next")).await.unwrap();
        assert_eq!(id, BookId(42));
    }
}
