//! Comments endpoints

use super::client::Pr0grammClient;
use crate::auth::NonceMode;
use crate::error::Result;
use crate::http::Params;
use crate::types::{ItemId, JsonValue, Vote};

/// Comments endpoint group
pub struct CommentsService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> CommentsService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    /// Post a comment, as a reply when `reply_to` is set
    pub async fn post(
        &self,
        item_id: ItemId,
        content: &str,
        reply_to: Option<u64>,
    ) -> Result<JsonValue> {
        let form = Params::new()
            .set("itemId", item_id)
            .set("parentId", reply_to.unwrap_or(0))
            .set("comment", content);
        self.client
            .post("comments/post", form, NonceMode::Required)
            .await
    }

    /// Vote on a comment
    pub async fn vote(&self, comment_id: u64, vote: Vote) -> Result<JsonValue> {
        let form = Params::new().set("id", comment_id).set("vote", vote.value());
        self.client
            .post("comments/vote", form, NonceMode::Required)
            .await
    }

    /// Delete a comment and its replies (moderators)
    pub async fn delete(&self, comment_id: u64, reason: &str) -> Result<JsonValue> {
        let form = Params::new().set("id", comment_id).set("reason", reason);
        self.client
            .post("comments/delete", form, NonceMode::Required)
            .await
    }

    /// Blank a comment's content but keep its replies (moderators)
    pub async fn soft_delete(&self, comment_id: u64, reason: &str) -> Result<JsonValue> {
        let form = Params::new().set("id", comment_id).set("reason", reason);
        self.client
            .post("comments/softDelete", form, NonceMode::Required)
            .await
    }

    /// Replace the text of an own comment
    pub async fn edit(&self, comment_id: u64, content: &str) -> Result<JsonValue> {
        let form = Params::new()
            .set("commentId", comment_id)
            .set("comment", content);
        self.client
            .post("comments/edit", form, NonceMode::Required)
            .await
    }
}
