//! Items endpoints
//!
//! One-shot page fetches, cursor streams, item details and votes.

use super::client::Pr0grammClient;
use super::types::{Item, ItemInfo, ItemsQuery, ItemsResponse};
use crate::auth::NonceMode;
use crate::error::Result;
use crate::http::Params;
use crate::pagination::{CursorStream, Direction, ItemStream, PageFetcher};
use crate::types::{Cursor, ItemId, JsonValue, Vote};
use async_trait::async_trait;
use std::sync::Arc;

const ITEMS_GET: &str = "items/get";

/// Fetches `items/get` pages in one direction with fixed filters
#[derive(Clone)]
pub struct ItemsFetcher {
    client: Pr0grammClient,
    query: Arc<ItemsQuery>,
    direction: Direction,
}

impl ItemsFetcher {
    /// Bind a client, filters and direction
    pub fn new(client: Pr0grammClient, query: ItemsQuery, direction: Direction) -> Self {
        Self {
            client,
            query: Arc::new(query),
            direction,
        }
    }

    /// Filters used for every page
    pub fn query(&self) -> &ItemsQuery {
        &self.query
    }
}

#[async_trait]
impl PageFetcher for ItemsFetcher {
    type Item = Item;

    fn direction(&self) -> Direction {
        self.direction
    }

    async fn fetch_page(&self, cursor: Cursor) -> Result<ItemsResponse> {
        let params = self.query.page_params(self.direction, cursor);
        self.client.get_as(ITEMS_GET, &params).await
    }
}

/// Items endpoint group
pub struct ItemsService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> ItemsService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    fn fetcher(&self, query: ItemsQuery, direction: Direction) -> ItemsFetcher {
        ItemsFetcher::new(self.client.clone(), query, direction)
    }

    /// Newest items, without a cursor
    pub async fn latest(&self, query: &ItemsQuery) -> Result<ItemsResponse> {
        self.client.get_as(ITEMS_GET, &query.to_params()).await
    }

    /// One page of items newer than `cursor`
    pub async fn get_newer(&self, query: &ItemsQuery, cursor: Cursor) -> Result<ItemsResponse> {
        self.get_page(query, Direction::Newer, cursor).await
    }

    /// One page of items older than `cursor`
    pub async fn get_older(&self, query: &ItemsQuery, cursor: Cursor) -> Result<ItemsResponse> {
        self.get_page(query, Direction::Older, cursor).await
    }

    /// One page of items around `id`
    pub async fn get_around(&self, query: &ItemsQuery, id: ItemId) -> Result<ItemsResponse> {
        self.get_page(query, Direction::Around, id).await
    }

    /// One page in any direction
    pub async fn get_page(
        &self,
        query: &ItemsQuery,
        direction: Direction,
        cursor: Cursor,
    ) -> Result<ItemsResponse> {
        self.fetcher(query.clone(), direction)
            .fetch_page(cursor)
            .await
    }

    /// Stream items newer than `start`, ascending, until the newest item
    pub fn stream_newer(&self, query: ItemsQuery, start: Cursor) -> ItemStream<Item> {
        CursorStream::new(self.fetcher(query, Direction::Newer), start).into_stream()
    }

    /// Stream items older than `start`, descending, until the oldest item
    pub fn stream_older(&self, query: ItemsQuery, start: Cursor) -> ItemStream<Item> {
        CursorStream::new(self.fetcher(query, Direction::Older), start).into_stream()
    }

    /// Tags and comments of an item
    pub async fn info(&self, item_id: ItemId) -> Result<ItemInfo> {
        let query = Params::new().set("itemId", item_id);
        self.client.get_as("items/info", &query).await
    }

    /// Vote on an item
    pub async fn vote(&self, id: ItemId, vote: Vote) -> Result<JsonValue> {
        let form = Params::new().set("id", id).set("vote", vote.value());
        self.client
            .post("items/vote", form, NonceMode::Required)
            .await
    }

    /// Delete an item (moderators), optionally banning the uploader for `ban_days`
    pub async fn delete(
        &self,
        id: ItemId,
        reason: &str,
        ban_days: Option<u32>,
    ) -> Result<JsonValue> {
        let form = Params::new()
            .set("id", id)
            .set("reason", reason)
            .set("banUser", ban_days.is_some())
            .opt("days", ban_days);
        self.client
            .post("items/delete", form, NonceMode::Required)
            .await
    }
}
