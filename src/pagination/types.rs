//! Pagination types and traits
//!
//! Defines the page shape returned by the items endpoint and the fetcher
//! abstraction the cursor stream is driven by.

use crate::error::Result;
use crate::types::Cursor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a page request moves from its cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Items published after the cursor, ascending
    Newer,
    /// Items published before the cursor, descending
    Older,
    /// A window of items surrounding the cursor
    Around,
}

impl Direction {
    /// Query parameter carrying the cursor
    pub fn query_key(self) -> &'static str {
        match self {
            Direction::Newer => "newer",
            Direction::Older => "older",
            Direction::Around => "id",
        }
    }

    /// Whether a stream should request another page after `batch`.
    ///
    /// Newer streams stop once the newest item was reached, older streams
    /// once the oldest was. An around window is always a single page.
    pub fn continues<T>(self, batch: &Batch<T>) -> bool {
        match self {
            Direction::Newer => !batch.at_start,
            Direction::Older => !batch.at_end,
            Direction::Around => false,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Newer => "newer",
            Direction::Older => "older",
            Direction::Around => "around",
        })
    }
}

/// One page of items plus boundary flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch<T> {
    /// Items in the order the server returned them
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// The page reaches the newest known item
    #[serde(default)]
    pub at_start: bool,
    /// The page reaches the oldest known item
    #[serde(default)]
    pub at_end: bool,
}

impl<T> Batch<T> {
    /// Create a batch
    pub fn new(items: Vec<T>, at_start: bool, at_end: bool) -> Self {
        Self {
            items,
            at_start,
            at_end,
        }
    }

    /// Number of items in the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identified> Batch<T> {
    /// Identifier of the last item, the cursor for the following page
    pub fn last_id(&self) -> Option<Cursor> {
        self.items.last().map(Identified::id)
    }
}

/// Anything with a position in the item sequence
pub trait Identified {
    /// The item's identifier
    fn id(&self) -> Cursor;
}

/// Fetches single pages for one direction and one fixed set of filters.
///
/// Implementations must not change their filters between calls: the same
/// cursor always produces the same request.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Item type of the pages
    type Item: Identified + Send + 'static;

    /// Direction this fetcher pages in
    fn direction(&self) -> Direction;

    /// Fetch the page at `cursor`
    async fn fetch_page(&self, cursor: Cursor) -> Result<Batch<Self::Item>>;
}
