use crate::domain::{Book, Catalog};
use crate::ports::catalog_store::{CatalogStore as CatalogStoreTrait, Result, StorageError};
use std::io;
use std::sync::Mutex;

/// In-memory CatalogStore for tests
///
/// Starts from a fixed set of books and remembers the last saved state.
/// Can be switched to fail every save.
pub struct CatalogStore {
    books: Mutex<Vec<Book>>,
    save_count: Mutex<usize>,
    fail_on_save: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Seed the store with previously persisted books
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
            save_count: Mutex::new(0),
            fail_on_save: false,
        }
    }

    /// Make every save fail with a permission error
    pub fn failing(mut self) -> Self {
        self.fail_on_save = true;
        self
    }

    /// Books currently held by the store
    pub fn stored_books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStoreTrait for CatalogStore {
    fn load(&self) -> Catalog {
        Catalog::from_books(self.stored_books())
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        if self.fail_on_save {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock store is read-only",
            )));
        }

        *self.books.lock().unwrap() = catalog.list().to_vec();
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}
