// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pr0gramm API client
//!
//! Async client for the pr0gramm JSON API: item listings, tags, comments,
//! profiles and account endpoints, plus lazy streams that walk the item
//! sequence page by page.
//!
//! ## Features
//!
//! - **Typed endpoints**: one method per remote endpoint, grouped by area
//! - **Sessions**: cookie jar backed login, nonce derived from the `me` cookie
//! - **Cursor streams**: pull-based `Stream` of items in ascending or descending order
//! - **Rate limiting**: optional client-side request throttling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use pr0gramm_api::{ClientConfig, ItemsQuery, Pr0grammClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Pr0grammClient::new(ClientConfig::default())?;
//!
//!     // One page, no session needed
//!     let page = client.items().get_older(&ItemsQuery::new(), 5_000_000).await?;
//!
//!     // Every promoted item newer than 4_000_000, oldest first
//!     let query = ItemsQuery::new().promoted(true);
//!     let mut stream = client.items().stream_newer(query, 4_000_000);
//!     while let Some(item) = stream.next().await {
//!         let item = item?;
//!         println!("{} {}", item.id, item.image);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Pr0grammClient                           │
//! │  items()  tags()  comments()  profile()  user()  contact()      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────────┬──────────────────────┐
//! │     Auth      │          HTTP            │      Pagination      │
//! ├───────────────┼──────────────────────────┼──────────────────────┤
//! │ Session cookie│ GET query / POST form    │ CursorStream         │
//! │ Nonce         │ Cookie jar               │ Stall / boundary stop│
//! │               │ Rate limit               │ No prefetch          │
//! └───────────────┴──────────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport with cookie jar and rate limiting
pub mod http;

/// Session cookie and nonce handling
pub mod auth;

/// Cursor stream engine
pub mod pagination;

/// Endpoint façade
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{Item, ItemsQuery, Pr0grammClient};
pub use config::ClientConfig;
pub use pagination::{Batch, CursorStream, Direction, ItemStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
