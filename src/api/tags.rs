//! Tags endpoints

use super::client::Pr0grammClient;
use crate::auth::NonceMode;
use crate::error::Result;
use crate::http::Params;
use crate::types::{ItemId, JsonValue, Vote};

/// Tags endpoint group
pub struct TagsService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> TagsService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    /// Add tags to an item
    pub async fn add(&self, item_id: ItemId, tags: &[&str]) -> Result<JsonValue> {
        let form = Params::new()
            .set("itemId", item_id)
            .set("tags", tags.join(","));
        self.client.post("tags/add", form, NonceMode::Required).await
    }

    /// Vote on a tag
    pub async fn vote(&self, tag_id: u64, vote: Vote) -> Result<JsonValue> {
        let form = Params::new().set("id", tag_id).set("vote", vote.value());
        self.client
            .post("tags/vote", form, NonceMode::Required)
            .await
    }

    /// Remove tags from an item (moderators), optionally banning their authors
    pub async fn delete(
        &self,
        item_id: ItemId,
        tag_ids: Vec<u64>,
        ban_days: Option<u32>,
    ) -> Result<JsonValue> {
        let form = Params::new()
            .set("itemId", item_id)
            .set("tags", tag_ids)
            .set("banUsers", ban_days.is_some())
            .opt("days", ban_days);
        self.client
            .post("tags/delete", form, NonceMode::Required)
            .await
    }

    /// Tag details including votes (moderators)
    pub async fn details(&self, item_id: ItemId) -> Result<JsonValue> {
        let query = Params::new().set("itemId", item_id);
        self.client.get("tags/details", &query).await
    }

    /// Most used tags
    pub async fn top(&self) -> Result<JsonValue> {
        self.client.get("tags/top", &Params::new()).await
    }
}
