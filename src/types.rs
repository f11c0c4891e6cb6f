//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and small value types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Identifier of an item, tag or comment
pub type ItemId = u64;

/// Position in the item sequence. Shares the identifier domain with [`ItemId`].
pub type Cursor = ItemId;

// ============================================================================
// Content Flags
// ============================================================================

bitflags::bitflags! {
    /// Content rating filter sent as the `flags` parameter
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ContentFlags: u8 {
        /// Safe for work
        const SFW = 0b0000_0001;
        /// Not safe for work
        const NSFW = 0b0000_0010;
        /// Not safe for life
        const NSFL = 0b0000_0100;
        /// Not safe for public
        const NSFP = 0b0000_1000;
        /// Politics
        const POL = 0b0001_0000;
    }
}

impl Default for ContentFlags {
    fn default() -> Self {
        Self::SFW
    }
}

impl ContentFlags {
    /// Numeric value as expected by the API
    pub fn value(self) -> u8 {
        self.bits()
    }
}

impl FromStr for ContentFlags {
    type Err = Error;

    /// Parse a comma separated list such as `sfw,nsfw`, or a raw number
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(bits) = s.trim().parse::<u8>() {
            return Self::from_bits(bits)
                .ok_or_else(|| Error::config(format!("unknown content flag bits: {bits}")));
        }

        let mut flags = Self::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            flags |= match part.to_ascii_lowercase().as_str() {
                "sfw" => Self::SFW,
                "nsfw" => Self::NSFW,
                "nsfl" => Self::NSFL,
                "nsfp" => Self::NSFP,
                "pol" => Self::POL,
                "all" => Self::all(),
                other => return Err(Error::config(format!("unknown content flag: {other}"))),
            };
        }

        if flags.is_empty() {
            return Err(Error::config("content flags must not be empty"));
        }
        Ok(flags)
    }
}

impl fmt::Display for ContentFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for ContentFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ContentFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

// ============================================================================
// Votes
// ============================================================================

/// Vote value for items, tags and comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    /// Downvote
    Down,
    /// Remove an existing vote
    #[default]
    Neutral,
    /// Upvote
    Up,
    /// Upvote and add to favourites (items and comments only)
    Favorite,
}

impl Vote {
    /// Numeric value as expected by the API
    pub fn value(self) -> i64 {
        match self {
            Vote::Down => -1,
            Vote::Neutral => 0,
            Vote::Up => 1,
            Vote::Favorite => 2,
        }
    }
}
