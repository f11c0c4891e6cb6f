//! Transport abstraction
//!
//! Everything above the HTTP layer talks to the remote API through this
//! trait, which keeps the façade and the stream engine testable without a
//! network.

use super::params::Params;
use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Performs single GET/POST calls and returns the decoded JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Idempotent read with query parameters
    async fn get(&self, path: &str, query: &Params) -> Result<JsonValue>;

    /// State-changing call with a form-encoded body
    async fn post(&self, path: &str, form: &Params) -> Result<JsonValue>;
}
