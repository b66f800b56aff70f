//! Routes for the notebook server

pub mod chat;
pub mod documents;
pub mod pages;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build page and API routes
pub fn app_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        // Upload - with larger body limit for PDFs
        .route(
            "/upload",
            post(upload::upload_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Document management
        .route("/documents", get(documents::list_documents))
        .route("/documents/:filename", delete(documents::delete_document))
        // Chat
        .route("/chat", post(chat::chat))
}
