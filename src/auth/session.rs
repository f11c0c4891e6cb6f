//! Session cookie handling
//!
//! The API keeps the login session in a `me` cookie whose value is a
//! URL-encoded JSON object. Only the `id` field matters to this crate.

use crate::error::{Error, Result};
use crate::types::JsonObject;
use reqwest::cookie::{CookieStore, Jar};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;
use url::Url;

/// Name of the cookie carrying the session
pub const SESSION_COOKIE_NAME: &str = "me";

/// Decoded contents of the `me` cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    /// Session identifier
    pub id: String,
    /// Name of the logged in user
    #[serde(default, rename = "n")]
    pub name: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Decode a raw `me` cookie value
pub fn parse_session_cookie(raw: &str) -> Result<SessionCookie> {
    let decoded = urlencoding::decode(raw.trim())
        .map_err(|e| Error::malformed_cookie(format!("not valid UTF-8 once decoded: {e}")))?;

    let cookie: SessionCookie = serde_json::from_str(&decoded)
        .map_err(|e| Error::malformed_cookie(format!("not a session object: {e}")))?;

    if cookie.id.is_empty() {
        return Err(Error::malformed_cookie("empty session id"));
    }
    Ok(cookie)
}

/// Read-only access to the current session cookie
pub trait SessionStore: Send + Sync {
    /// Raw (still URL-encoded) value of the `me` cookie, if any
    fn raw_session_cookie(&self) -> Option<String>;

    /// Parsed session cookie. A malformed cookie reads as no session.
    fn session_cookie(&self) -> Option<SessionCookie> {
        let raw = self.raw_session_cookie()?;
        match parse_session_cookie(&raw) {
            Ok(cookie) => Some(cookie),
            Err(e) => {
                warn!("Ignoring session cookie: {e}");
                None
            }
        }
    }
}

/// Session store backed by the HTTP client's cookie jar
#[derive(Clone)]
pub struct JarSessionStore {
    jar: Arc<Jar>,
    url: Url,
}

impl JarSessionStore {
    /// Read cookies the jar would send to `url`
    pub fn new(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }
}

impl SessionStore for JarSessionStore {
    fn raw_session_cookie(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let header = header.to_str().ok()?;
        cookie_value(header, SESSION_COOKIE_NAME).map(str::to_string)
    }
}

impl std::fmt::Debug for JarSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JarSessionStore")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

/// Session store holding a cookie value set by the caller
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Create a store, optionally holding a raw `me` cookie value
    pub fn new(raw: Option<String>) -> Self {
        Self {
            raw: RwLock::new(raw),
        }
    }

    /// Replace the stored cookie value
    pub fn set(&self, raw: impl Into<String>) {
        *self.raw.write().unwrap_or_else(PoisonError::into_inner) = Some(raw.into());
    }

    /// Forget the session
    pub fn clear(&self) {
        *self.raw.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl SessionStore for MemorySessionStore {
    fn raw_session_cookie(&self) -> Option<String> {
        self.raw
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Find a cookie value in a `Cookie` header string
pub(crate) fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod memory_store_tests {
    use super::*;

    #[test]
    fn test_memory_store_writes_through_poisoned_lock() {
        let store = Arc::new(MemorySessionStore::new(Some("raw".to_string())));
        let holder = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.raw.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.raw.is_poisoned());

        store.clear();
        assert_eq!(store.raw_session_cookie(), None);

        store.set("again");
        assert_eq!(store.raw_session_cookie().as_deref(), Some("again"));
    }
}
