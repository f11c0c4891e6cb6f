//! Pagination module
//!
//! Cursor-based paging over the item sequence.
//!
//! # Overview
//!
//! A [`PageFetcher`] issues one page request for a fixed direction and
//! filter set. [`CursorStream`] drives a fetcher page after page, moving the
//! cursor to the last item of every page, and yields single items until the
//! sequence is exhausted.

mod stream;
mod types;

pub use stream::{CursorStream, ItemStream, StopReason};
pub use types::{Batch, Direction, Identified, PageFetcher};
