//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, BookQuery, BookSummary},
};

/// Success envelope for book creation
#[derive(Serialize, ToSchema)]
pub struct CreateBookResponse {
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    /// Generated id of the new book
    pub book_id: String,
}

/// Success envelope for the list endpoint
#[derive(Serialize, ToSchema)]
pub struct ListBooksResponse {
    pub status: String,
    pub data: BooksData,
}

#[derive(Serialize, ToSchema)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}

/// Success envelope for fetching a single book
#[derive(Serialize, ToSchema)]
pub struct GetBookResponse {
    pub status: String,
    pub data: BookData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// Success envelope carrying a message and no data
#[derive(Serialize, ToSchema)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = CreateBookResponse),
        (status = 400, description = "Missing name or readPage beyond pageCount", body = crate::error::FailResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<CreateBookResponse>)> {
    let book_id = state.services.books.create(payload)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            status: "success".to_string(),
            message: "Book added successfully".to_string(),
            data: BookIdData { book_id },
        }),
    ))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books (id, name, publisher only)", body = ListBooksResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ListBooksResponse>> {
    let books = state.services.books.list(&query)?;

    Ok(Json(ListBooksResponse {
        status: "success".to_string(),
        data: BooksData { books },
    }))
}

/// Get full book details by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = GetBookResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GetBookResponse>> {
    let book = state.services.books.get(&id)?;

    Ok(Json(GetBookResponse {
        status: "success".to_string(),
        data: BookData { book },
    }))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = StatusMessage),
        (status = 400, description = "Missing name or readPage beyond pageCount", body = crate::error::FailResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<StatusMessage>> {
    state.services.books.update(&id, payload)?;

    Ok(Json(StatusMessage {
        status: "success".to_string(),
        message: "Book updated successfully".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = StatusMessage),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusMessage>> {
    state.services.books.delete(&id)?;

    Ok(Json(StatusMessage {
        status: "success".to_string(),
        message: "Book deleted successfully".to_string(),
    }))
}
