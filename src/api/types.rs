//! Request filters and response types for the API endpoints

use crate::http::Params;
use crate::pagination::{Batch, Direction, Identified};
use crate::types::{ContentFlags, Cursor, ItemId, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Items Query
// ============================================================================

/// Filters for item listings.
///
/// A stream clones the query once and reuses it unchanged for every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsQuery {
    /// Content ratings to include
    #[serde(default)]
    pub flags: ContentFlags,
    /// Tag search expression
    #[serde(default)]
    pub tags: Option<String>,
    /// Only items uploaded by this user
    #[serde(default)]
    pub user: Option<String>,
    /// Only items that made it to the top page
    #[serde(default)]
    pub promoted: bool,
    /// Favourites collection of this user
    #[serde(default)]
    pub likes: Option<String>,
    /// Only items of the logged in user
    #[serde(default)]
    pub self_only: bool,
}

impl ItemsQuery {
    /// Create a query with default filters (SFW, everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set content flags
    #[must_use]
    pub fn flags(mut self, flags: ContentFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set tag search expression
    #[must_use]
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Restrict to uploads of a user
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Restrict to promoted items
    #[must_use]
    pub fn promoted(mut self, promoted: bool) -> Self {
        self.promoted = promoted;
        self
    }

    /// List a user's favourites
    #[must_use]
    pub fn likes(mut self, user: impl Into<String>) -> Self {
        self.likes = Some(user.into());
        self
    }

    /// Restrict to the logged in user's items
    #[must_use]
    pub fn self_only(mut self, self_only: bool) -> Self {
        self.self_only = self_only;
        self
    }

    /// Filter parameters without a cursor
    pub fn to_params(&self) -> Params {
        Params::new()
            .set("flags", self.flags.value())
            .opt("tags", self.tags.as_ref())
            .opt("user", self.user.as_ref())
            .opt("promoted", self.promoted.then_some(true))
            .opt("likes", self.likes.as_ref())
            .opt("self", self.self_only.then_some(true))
    }

    /// Filter parameters plus the cursor for one page
    pub fn page_params(&self, direction: Direction, cursor: Cursor) -> Params {
        self.to_params().set(direction.query_key(), cursor)
    }
}

// ============================================================================
// Items
// ============================================================================

/// A posted image or video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Id in the promoted sequence, 0 when not promoted
    #[serde(default)]
    pub promoted: u64,
    #[serde(default)]
    pub up: i64,
    #[serde(default)]
    pub down: i64,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Media path relative to the image host
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub fullsize: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub audio: bool,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub flags: ContentFlags,
    /// Uploader name
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub mark: i64,
}

impl Item {
    /// Net score
    pub fn score(&self) -> i64 {
        self.up - self.down
    }
}

impl Identified for Item {
    fn id(&self) -> Cursor {
        self.id
    }
}

/// Response of `items/get`
pub type ItemsResponse = Batch<Item>;

/// Tag attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub confidence: f64,
    pub tag: String,
}

/// Comment on an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Parent comment id, 0 for top level comments
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub content: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub up: i64,
    #[serde(default)]
    pub down: i64,
    #[serde(default)]
    pub confidence: f64,
    /// Author name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mark: i64,
}

/// Response of `items/info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

// ============================================================================
// User
// ============================================================================

/// Response of `user/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Ban details when the account is banned
    #[serde(default)]
    pub ban: Option<JsonValue>,
    #[serde(default)]
    pub identifier: Option<String>,
    /// Failure reason when `success` is false, e.g. `invalidLogin`
    #[serde(default)]
    pub error: Option<String>,
}

/// Captcha challenge required for login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captcha {
    /// Token to send back with the answer
    pub token: String,
    /// Image as a data URI
    pub captcha: String,
}

/// Answer to a [`Captcha`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaAnswer {
    pub token: String,
    pub answer: String,
}
