//! Profile endpoints

use super::client::Pr0grammClient;
use crate::auth::NonceMode;
use crate::error::Result;
use crate::http::Params;
use crate::types::{ContentFlags, JsonValue};

/// Profile endpoint group
pub struct ProfileService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> ProfileService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    /// Public profile of a user
    pub async fn info(&self, name: &str, flags: ContentFlags) -> Result<JsonValue> {
        let query = Params::new().set("name", name).set("flags", flags.value());
        self.client.get("profile/info", &query).await
    }

    /// Comments written by a user, older than `before` (unix seconds) when given
    pub async fn comments(
        &self,
        name: &str,
        flags: ContentFlags,
        before: Option<u64>,
    ) -> Result<JsonValue> {
        let query = Params::new()
            .set("name", name)
            .set("flags", flags.value())
            .opt("before", before);
        self.client.get("profile/comments", &query).await
    }

    /// Follow a user
    pub async fn follow(&self, name: &str) -> Result<JsonValue> {
        let form = Params::new().set("name", name);
        self.client
            .post("profile/follow", form, NonceMode::Required)
            .await
    }

    /// Stop following a user
    pub async fn unfollow(&self, name: &str) -> Result<JsonValue> {
        let form = Params::new().set("name", name);
        self.client
            .post("profile/unfollow", form, NonceMode::Required)
            .await
    }
}
