//! Book catalog service.
//!
//! Holds the validation rules and filter semantics; handlers stay thin.

use chrono::Utc;
use nanoid::nanoid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery, BookSummary},
    repository::Repository,
};

/// Length of generated book ids
const ID_LENGTH: usize = 16;

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate a payload and add a new book. Returns the generated id.
    pub fn create(&self, payload: BookPayload) -> AppResult<String> {
        let name = payload.name.clone().ok_or_else(|| {
            AppError::Validation("Failed to add book. Please provide a book name".to_string())
        })?;

        let page_count = payload.page_count.unwrap_or(0);
        let read_page = payload.read_page.unwrap_or(0);
        if read_page > page_count {
            return Err(AppError::Validation(
                "Failed to add book. readPage must not be greater than pageCount".to_string(),
            ));
        }

        let now = Utc::now();
        let book = Book {
            id: nanoid!(ID_LENGTH),
            name,
            year: payload.year.unwrap_or(0),
            author: payload.author.unwrap_or_default(),
            summary: payload.summary.unwrap_or_default(),
            publisher: payload.publisher.unwrap_or_default(),
            page_count,
            read_page,
            finished: Book::is_finished(read_page, page_count),
            reading: payload.reading.unwrap_or(false),
            inserted_at: now,
            updated_at: now,
        };

        let id = book.id.clone();
        self.repository.books.insert(book)?;
        tracing::debug!(book_id = %id, "book added");
        Ok(id)
    }

    /// List books as short summaries, applying at most one query filter.
    ///
    /// Filter precedence: name substring first, then reading, then finished,
    /// else unfiltered.
    pub fn list(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let books = self.repository.books.list()?;

        let filtered: Vec<&Book> = if let Some(needle) = &query.name {
            let needle = needle.to_lowercase();
            books
                .iter()
                .filter(|book| book.name.to_lowercase().contains(&needle))
                .collect()
        } else if let Some(reading) = query.reading_flag() {
            books.iter().filter(|book| book.reading == reading).collect()
        } else if let Some(finished) = query.finished_flag() {
            books
                .iter()
                .filter(|book| book.finished == finished)
                .collect()
        } else {
            books.iter().collect()
        };

        Ok(filtered.into_iter().map(BookSummary::from).collect())
    }

    /// Get the full record for an id
    pub fn get(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(id)?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Validate a payload and replace the fields of an existing book.
    ///
    /// An unknown id fails with not-found before any payload validation runs,
    /// so a bad payload against a missing id still yields 404.
    pub fn update(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        if !self.repository.books.contains(id)? {
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }

        let name = payload.name.clone().ok_or_else(|| {
            AppError::Validation("Failed to update book. Please provide a book name".to_string())
        })?;

        let page_count = payload.page_count.unwrap_or(0);
        let read_page = payload.read_page.unwrap_or(0);
        if read_page > page_count {
            return Err(AppError::Validation(
                "Failed to update book. readPage must not be greater than pageCount".to_string(),
            ));
        }

        let found = self.repository.books.update(id, |book| {
            book.name = name;
            book.year = payload.year.unwrap_or(0);
            book.author = payload.author.unwrap_or_default();
            book.summary = payload.summary.unwrap_or_default();
            book.publisher = payload.publisher.unwrap_or_default();
            book.page_count = page_count;
            book.read_page = read_page;
            book.finished = Book::is_finished(read_page, page_count);
            book.reading = payload.reading.unwrap_or(false);
            book.updated_at = Utc::now();
        })?;

        if !found {
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }

        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }

    /// Remove a book by id
    pub fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.remove(id)? {
            return Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ));
        }

        tracing::debug!(book_id = %id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BookService {
        BookService::new(Repository::new())
    }

    fn payload(name: &str) -> BookPayload {
        BookPayload {
            name: Some(name.to_string()),
            year: Some(2011),
            author: Some("Jane Doe".to_string()),
            summary: Some("A test book".to_string()),
            publisher: Some("Acme Press".to_string()),
            page_count: Some(100),
            read_page: Some(25),
            reading: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn create_without_name_is_rejected() {
        let service = service();
        let mut p = payload("ignored");
        p.name = None;

        let err = service.create(p).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_with_read_page_beyond_page_count_is_rejected() {
        let service = service();
        let mut p = payload("Overread");
        p.read_page = Some(101);

        let err = service.create(p).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn created_book_is_retrievable_by_id() {
        let service = service();
        let id = service.create(payload("Dune")).unwrap();
        assert_eq!(id.len(), ID_LENGTH);

        let book = service.get(&id).unwrap();
        assert_eq!(book.name, "Dune");
        assert_eq!(book.publisher, "Acme Press");
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[test]
    fn finished_is_derived_from_pages() {
        let service = service();

        let mut done = payload("Done");
        done.read_page = Some(100);
        let id = service.create(done).unwrap();
        assert!(service.get(&id).unwrap().finished);

        let id = service.create(payload("In progress")).unwrap();
        assert!(!service.get(&id).unwrap().finished);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = service().get("missing-id").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn update_replaces_fields_and_recomputes_finished() {
        let service = service();
        let id = service.create(payload("Original")).unwrap();
        let created = service.get(&id).unwrap();

        let mut p = payload("Updated");
        p.read_page = Some(100);
        p.reading = Some(true);
        service.update(&id, p).unwrap();

        let book = service.get(&id).unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.name, "Updated");
        assert!(book.finished);
        assert!(book.reading);
        assert_eq!(book.inserted_at, created.inserted_at);
        assert!(book.updated_at >= created.updated_at);
    }

    #[test]
    fn update_unknown_id_fails_before_validation() {
        let service = service();

        // Payload is also invalid; not-found still wins.
        let mut p = payload("ignored");
        p.name = None;

        let err = service.update("missing-id", p).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn update_with_invalid_payload_is_rejected() {
        let service = service();
        let id = service.create(payload("Stable")).unwrap();

        let mut p = payload("ignored");
        p.name = None;
        let err = service.update(&id, p).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut p = payload("ignored");
        p.read_page = Some(999);
        let err = service.update(&id, p).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Rejected updates leave the record untouched
        assert_eq!(service.get(&id).unwrap().name, "Stable");
    }

    #[test]
    fn delete_removes_the_record() {
        let service = service();
        let id = service.create(payload("Ephemeral")).unwrap();

        service.delete(&id).unwrap();
        assert!(matches!(service.get(&id), Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(&id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn list_returns_summaries_in_insertion_order() {
        let service = service();
        service.create(payload("First")).unwrap();
        service.create(payload("Second")).unwrap();

        let books = service.list(&BookQuery::default()).unwrap();
        let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn list_filters_by_name_substring_case_insensitively() {
        let service = service();
        service.create(payload("Dicoding Academy")).unwrap();
        service.create(payload("Something else")).unwrap();

        let query = BookQuery {
            name: Some("DICODING".to_string()),
            ..Default::default()
        };
        let books = service.list(&query).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Dicoding Academy");
    }

    #[test]
    fn list_filters_by_reading_flag() {
        let service = service();
        let mut p = payload("Active");
        p.reading = Some(true);
        service.create(p).unwrap();
        service.create(payload("Idle")).unwrap();

        let query = BookQuery {
            reading: Some("1".to_string()),
            ..Default::default()
        };
        let books = service.list(&query).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Active");

        let query = BookQuery {
            reading: Some("0".to_string()),
            ..Default::default()
        };
        let books = service.list(&query).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Idle");
    }

    #[test]
    fn list_filters_by_finished_flag() {
        let service = service();
        let mut p = payload("Complete");
        p.read_page = Some(100);
        service.create(p).unwrap();
        service.create(payload("Partial")).unwrap();

        let query = BookQuery {
            finished: Some("1".to_string()),
            ..Default::default()
        };
        let books = service.list(&query).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Complete");
    }

    #[test]
    fn name_filter_takes_precedence_over_flags() {
        let service = service();
        let mut p = payload("Reading now");
        p.reading = Some(true);
        service.create(p).unwrap();
        service.create(payload("Shelved")).unwrap();

        // reading=1 alone would exclude "Shelved"; the name filter wins.
        let query = BookQuery {
            name: Some("shelved".to_string()),
            reading: Some("1".to_string()),
            ..Default::default()
        };
        let books = service.list(&query).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Shelved");
    }
}
