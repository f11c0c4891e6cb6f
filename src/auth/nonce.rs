//! Nonce derivation
//!
//! State-changing requests carry a `_nonce` form field: the first 16
//! characters of the session id.

use super::session::{parse_session_cookie, SessionCookie, SessionStore};
use crate::error::{Error, Result};
use std::fmt;

/// Form field the nonce is sent in
pub const NONCE_PARAM: &str = "_nonce";

/// Anti-CSRF token derived from the session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(String);

impl Nonce {
    /// Number of session id characters used
    pub const LEN: usize = 16;

    /// Take the nonce from a decoded session cookie
    pub fn from_session(cookie: &SessionCookie) -> Self {
        Self(cookie.id.chars().take(Self::LEN).collect())
    }

    /// Derive the nonce from the current session.
    ///
    /// Fails with [`Error::Unauthenticated`] when there is no `me` cookie or
    /// when the cookie cannot be decoded.
    pub fn derive(store: &dyn SessionStore) -> Result<Self> {
        let raw = store
            .raw_session_cookie()
            .ok_or_else(|| Error::unauthenticated("no session cookie"))?;

        let cookie = parse_session_cookie(&raw).map_err(|e| Error::unauthenticated(e.to_string()))?;
        Ok(Self::from_session(&cookie))
    }

    /// The nonce value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a POST gets a nonce attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonceMode {
    /// Attach a nonce, failing before any request when there is no session
    #[default]
    Required,
    /// Send without a nonce (login, password reset, contact form)
    Omit,
}
