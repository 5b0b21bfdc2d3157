//! In-memory book store.
//!
//! Records live in an ordered `Vec` behind an `RwLock`; insertion order is
//! preserved and every accessor takes the lock for the shortest possible
//! scope. Guards are never held across await points.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Append a record, preserving insertion order
    pub fn insert(&self, book: Book) -> AppResult<()> {
        self.write()?.push(book);
        Ok(())
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self.read()?.iter().find(|book| book.id == id).cloned())
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: &str) -> AppResult<bool> {
        Ok(self.read()?.iter().any(|book| book.id == id))
    }

    /// Apply `f` to the record with this id. Returns false when the id is
    /// unknown.
    pub fn update<F>(&self, id: &str, f: F) -> AppResult<bool>
    where
        F: FnOnce(&mut Book),
    {
        let mut books = self.write()?;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                f(book);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with this id. Returns false when the id is unknown.
    pub fn remove(&self, id: &str) -> AppResult<bool> {
        let mut books = self.write()?;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
