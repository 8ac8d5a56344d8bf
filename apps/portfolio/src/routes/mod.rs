pub mod content;
pub mod health;
pub mod page;
pub mod static_files;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/theme", post(page::handle_set_theme))
        .route("/cv", get(page::handle_cv_download))
        .route("/static/style.css", get(static_files::serve_css))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content", get(content::handle_get_content))
        .fallback(not_found)
        .with_state(state)
}
