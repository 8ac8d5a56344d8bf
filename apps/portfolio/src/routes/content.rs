use axum::{extract::State, Json};
use serde::Serialize;

use crate::content::validation::ValidationReport;
use crate::content::{validate_content, Content};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContentResponse {
    pub content: Content,
    pub validation: ValidationReport,
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<ContentResponse> {
    let content = state.content.as_ref().clone();
    let validation = validate_content(&content);
    Json(ContentResponse {
        content,
        validation,
    })
}
