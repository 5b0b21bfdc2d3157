//! Book record model and related wire types.
//!
//! All wire field names are camelCase (`pageCount`, `readPage`, `insertedAt`,
//! `updatedAt`), matching the public API format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A stored book record.
///
/// Invariant: `read_page <= page_count`, and `finished` always equals
/// `read_page == page_count`. Both are enforced by the service layer;
/// `finished` is never taken from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i32,
    pub read_page: i32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Whether the book has been read cover to cover
    pub fn is_finished(read_page: i32, page_count: i32) -> bool {
        read_page == page_count
    }
}

/// Short projection returned by the list endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Client-supplied book fields for create and update.
///
/// Everything is optional on the wire; the service decides which absences are
/// validation errors (`name`) and which fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i32>,
    pub read_page: Option<i32>,
    pub reading: Option<bool>,
}

/// Query filters for the list endpoint.
///
/// `reading` and `finished` arrive as query strings; `1`/`true` and
/// `0`/`false` are recognized, anything else is ignored so the next filter
/// in precedence order applies.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl BookQuery {
    pub fn reading_flag(&self) -> Option<bool> {
        parse_flag(self.reading.as_deref())
    }

    pub fn finished_flag(&self) -> Option<bool> {
        parse_flag(self.finished.as_deref())
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") | Some("true") => Some(true),
        Some("0") | Some("false") => Some(false),
        _ => None,
    }
}
