use axum::{http::header, response::IntoResponse};

/// Stylesheet shared by every render; palette values are injected per page.
pub const CSS: &str = include_str!("../../static/style.css");

/// GET /static/style.css
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], CSS)
}
