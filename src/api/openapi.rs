//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory book catalog REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::BookPayload,
            books::CreateBookResponse,
            books::BookIdData,
            books::ListBooksResponse,
            books::BooksData,
            books::GetBookResponse,
            books::BookData,
            books::StatusMessage,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::FailResponse,
        )
    ),
    tags(
        (name = "books", description = "Book catalog operations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Create a router serving the Swagger UI and the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
