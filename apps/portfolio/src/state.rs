use std::sync::Arc;

use crate::assets::AssetSource;
use crate::config::PageSettings;
use crate::content::Content;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub content: Arc<Content>,
    /// Filesystem loader in production. Re-read on every render, never cached.
    pub assets: Arc<dyn AssetSource>,
    pub page: Arc<PageSettings>,
    pub sessions: SessionStore,
}
