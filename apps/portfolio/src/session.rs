//! Per-visitor session state. The only mutable value a session holds is its
//! `ThemeState`; sessions live in memory and vanish on restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{header, HeaderMap, HeaderValue};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::theme::ThemeState;

pub const SESSION_COOKIE: &str = "portfolio_session";

#[derive(Debug, Clone, Copy)]
struct Session {
    theme: ThemeState,
    last_seen: Instant,
}

/// Resolved session for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// `None` until the visitor first changes the theme.
    pub id: Option<Uuid>,
    pub theme: ThemeState,
    /// True when this request created the session and a cookie must be issued.
    pub is_new: bool,
}

impl SessionContext {
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        let id = self.id.filter(|_| self.is_new)?;
        HeaderValue::from_str(&format!(
            "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
        ))
        .ok()
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Looks up the session named by the request cookie. Missing, unknown or
    /// expired sessions resolve to the default theme without touching the store.
    pub async fn resolve(&self, headers: &HeaderMap) -> SessionContext {
        let anonymous = SessionContext {
            id: None,
            theme: ThemeState::default(),
            is_new: false,
        };
        let Some(id) = session_id_from_headers(headers) else {
            return anonymous;
        };

        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&id) {
            Some(session) if now.duration_since(session.last_seen) <= self.ttl => {
                session.last_seen = now;
                SessionContext {
                    id: Some(id),
                    theme: session.theme,
                    is_new: false,
                }
            }
            _ => anonymous,
        }
    }

    /// Stores `theme` for the given session. A fresh session is created (and
    /// idle ones pruned) when `id` is absent or no longer live.
    pub async fn set_theme(&self, id: Option<Uuid>, theme: ThemeState) -> SessionContext {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;

        if let Some(id) = id {
            if let Some(session) = sessions.get_mut(&id) {
                if now.duration_since(session.last_seen) <= self.ttl {
                    session.theme = theme;
                    session.last_seen = now;
                    return SessionContext {
                        id: Some(id),
                        theme,
                        is_new: false,
                    };
                }
            }
        }

        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.last_seen) <= ttl);
        if sessions.len() < before {
            debug!("Pruned {} idle sessions", before - sessions.len());
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Session {
                theme,
                last_seen: now,
            },
        );
        debug!("Created session {id}");

        SessionContext {
            id: Some(id),
            theme,
            is_new: true,
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Extracts the session id from the `Cookie` header(s).
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_headers(id: Uuid) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other=1; {SESSION_COOKIE}={id}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_cookie_parsing_finds_session_among_others() {
        let id = Uuid::new_v4();
        assert_eq!(session_id_from_headers(&cookie_headers(id)), Some(id));
    }

    #[test]
    fn test_malformed_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("portfolio_session=not-a-uuid"),
        );
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[tokio::test]
    async fn test_cookieless_requests_do_not_grow_store() {
        let store = SessionStore::new(Duration::from_secs(86_400));
        for _ in 0..1_000 {
            let ctx = store.resolve(&HeaderMap::new()).await;
            assert_eq!(ctx.id, None);
            assert_eq!(ctx.theme, ThemeState::Light);
            assert!(ctx.set_cookie().is_none());
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_cookie_does_not_create_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let ctx = store.resolve(&cookie_headers(Uuid::new_v4())).await;
        assert_eq!(ctx.id, None);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_first_theme_change_creates_session_and_cookie() {
        let store = SessionStore::new(Duration::from_secs(60));
        let ctx = store.set_theme(None, ThemeState::Dark).await;
        assert!(ctx.is_new);
        assert_eq!(ctx.theme, ThemeState::Dark);
        let cookie = ctx.set_cookie().unwrap();
        assert!(cookie.to_str().unwrap().starts_with("portfolio_session="));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_theme_persists_within_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let created = store.set_theme(None, ThemeState::Dark).await;

        let again = store.resolve(&cookie_headers(created.id.unwrap())).await;
        assert!(!again.is_new);
        assert_eq!(again.id, created.id);
        assert_eq!(again.theme, ThemeState::Dark);
        assert!(again.set_cookie().is_none());

        let updated = store.set_theme(again.id, ThemeState::Light).await;
        assert!(!updated.is_new);
        assert_eq!(updated.id, created.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let a = store.set_theme(None, ThemeState::Dark).await.id.unwrap();
        let b = store.set_theme(None, ThemeState::Light).await.id.unwrap();

        assert_eq!(store.resolve(&cookie_headers(a)).await.theme, ThemeState::Dark);
        assert_eq!(store.resolve(&cookie_headers(b)).await.theme, ThemeState::Light);
    }

    #[tokio::test]
    async fn test_expired_session_is_replaced_and_pruned() {
        let store = SessionStore::new(Duration::ZERO);
        let first = store.set_theme(None, ThemeState::Dark).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        let resolved = store.resolve(&cookie_headers(first.id.unwrap())).await;
        assert_eq!(resolved.id, None);
        assert_eq!(resolved.theme, ThemeState::Light);

        let second = store.set_theme(first.id, ThemeState::Dark).await;
        assert!(second.is_new);
        assert_ne!(second.id, first.id);
        assert_eq!(store.len().await, 1);
    }
}
