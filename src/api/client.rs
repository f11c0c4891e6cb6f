//! API client
//!
//! `Pr0grammClient` ties a [`Transport`] to a [`SessionStore`] and adds the
//! `_nonce` field to state-changing requests. Endpoint groups are reached
//! through the service accessors (`items()`, `tags()`, ...).

use super::comments::CommentsService;
use super::contact::ContactService;
use super::items::ItemsService;
use super::profile::ProfileService;
use super::tags::TagsService;
use super::user::UserService;
use crate::auth::{JarSessionStore, Nonce, NonceMode, SessionCookie, SessionStore, NONCE_PARAM};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Params, Transport};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Client for the pr0gramm API. Cheap to clone; clones share the session.
#[derive(Clone)]
pub struct Pr0grammClient {
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    http: Option<HttpClient>,
}

impl Pr0grammClient {
    /// Create a client talking HTTP with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(config)?;
        let session = JarSessionStore::new(http.jar(), http.base_url().clone());

        Ok(Self {
            transport: Arc::new(http.clone()),
            session: Arc::new(session),
            http: Some(http),
        })
    }

    /// Create a client from a custom transport and session store
    pub fn with_parts(transport: Arc<dyn Transport>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            transport,
            session,
            http: None,
        }
    }

    /// Underlying HTTP client, when built with [`Pr0grammClient::new`]
    pub fn http(&self) -> Option<&HttpClient> {
        self.http.as_ref()
    }

    /// Current session cookie, if logged in
    pub fn session(&self) -> Option<SessionCookie> {
        self.session.session_cookie()
    }

    /// Check if a usable session cookie is present
    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    /// Nonce for the current session
    pub fn nonce(&self) -> Result<Nonce> {
        Nonce::derive(self.session.as_ref())
    }

    /// GET an endpoint
    pub async fn get(&self, path: &str, query: &Params) -> Result<JsonValue> {
        self.transport.get(path, query).await
    }

    /// GET an endpoint and decode the body
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str, query: &Params) -> Result<T> {
        let body = self.get(path, query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// POST to an endpoint.
    ///
    /// With [`NonceMode::Required`] the nonce is derived first; without a
    /// session this fails before anything is sent.
    pub async fn post(&self, path: &str, mut form: Params, mode: NonceMode) -> Result<JsonValue> {
        if mode == NonceMode::Required {
            let nonce = self.nonce()?;
            form.insert(NONCE_PARAM, nonce.as_str());
        }

        debug!("POST {} ({:?}, {} fields)", path, mode, form.len());
        self.transport.post(path, &form).await
    }

    /// POST to an endpoint and decode the body
    pub async fn post_as<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Params,
        mode: NonceMode,
    ) -> Result<T> {
        let body = self.post(path, form, mode).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Item listings, votes and moderation
    pub fn items(&self) -> ItemsService<'_> {
        ItemsService::new(self)
    }

    /// Tag endpoints
    pub fn tags(&self) -> TagsService<'_> {
        TagsService::new(self)
    }

    /// Comment endpoints
    pub fn comments(&self) -> CommentsService<'_> {
        CommentsService::new(self)
    }

    /// Public profiles
    pub fn profile(&self) -> ProfileService<'_> {
        ProfileService::new(self)
    }

    /// Login and account endpoints
    pub fn user(&self) -> UserService<'_> {
        UserService::new(self)
    }

    /// Contact form
    pub fn contact(&self) -> ContactService<'_> {
        ContactService::new(self)
    }
}

impl std::fmt::Debug for Pr0grammClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pr0grammClient")
            .field("http", &self.http)
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
