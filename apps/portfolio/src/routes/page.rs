use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::assets::load_pdf;
use crate::errors::AppError;
use crate::render::{render_page, Tab};
use crate::state::AppState;
use crate::theme::ThemeState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
}

#[derive(Deserialize)]
pub struct ThemeForm {
    /// Absent means "flip the current theme".
    pub theme: Option<String>,
    pub tab: Option<String>,
}

/// GET /
/// One full render pass for the caller's session theme. Read-only: visitors who
/// never change the theme get the default and no session.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = state.sessions.resolve(&headers).await;
    let tab = Tab::from_key(params.tab.as_deref());

    // Asset reads hit the filesystem, so the pass runs on the blocking pool.
    let html = tokio::task::spawn_blocking(move || {
        render_page(
            &state.content,
            session.theme,
            state.assets.as_ref(),
            &state.page,
            tab,
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Html(html).into_response())
}

/// POST /theme
/// Stores the chosen theme in the session and redirects back to the page.
pub async fn handle_set_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Result<Response, AppError> {
    let requested = form
        .theme
        .as_deref()
        .map(str::parse::<ThemeState>)
        .transpose()
        .map_err(AppError::Validation)?;
    let current = state.sessions.resolve(&headers).await;
    let theme = requested.unwrap_or_else(|| current.theme.toggled());
    let session = state.sessions.set_theme(current.id, theme).await;
    if let Some(id) = session.id {
        info!("Session {id} switched to {theme} theme");
    }

    let tab = Tab::from_key(form.tab.as_deref());
    let mut response = Redirect::to(&format!("/?tab={}", tab.key())).into_response();
    if let Some(cookie) = session.set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

/// GET /cv
/// Streams the CV with `application/pdf`; 404 with a readable message when absent.
pub async fn handle_cv_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let download = tokio::task::spawn_blocking(move || {
        load_pdf(state.assets.as_ref(), &state.page.cv_filename)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    info!(
        "Serving {} ({} bytes)",
        download.filename,
        download.size_bytes()
    );

    let headers = [
        (header::CONTENT_TYPE, download.mime.to_string()),
        (header::CONTENT_DISPOSITION, download.content_disposition()),
    ];
    Ok((headers, download.body).into_response())
}
