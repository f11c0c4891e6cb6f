//! Cursor stream engine
//!
//! Turns a [`PageFetcher`] into a lazy sequence of items. Pages are fetched
//! one at a time and only once the previous page has been handed out
//! completely, so memory stays bounded by a single page.
//!
//! A stream ends successfully on the first of:
//! - an empty page
//! - a page whose last id equals the cursor it was requested with (stall)
//! - a page whose boundary flag says there is nothing further in the
//!   fetcher's direction
//!
//! Fetch errors are yielded once, after which the stream is finished.

use super::types::{Direction, PageFetcher};
use crate::error::Result;
use crate::types::Cursor;
use futures::Stream;
use std::collections::VecDeque;
use std::pin::Pin;
use tracing::{debug, trace};

/// Boxed stream of items, as returned by the streaming endpoints
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Why a cursor stream stopped fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page came back without items
    EmptyPage,
    /// The cursor did not move past the previous one
    Stalled,
    /// The page reached the newest/oldest item
    Boundary,
    /// A fetch failed
    Failed,
}

/// Pull-based cursor pagination state machine.
///
/// Owns the fetcher for the lifetime of one traversal. Dropping it stops
/// the traversal; nothing runs in the background.
pub struct CursorStream<F: PageFetcher> {
    fetcher: F,
    direction: Direction,
    current: Cursor,
    last: Option<Cursor>,
    buffer: VecDeque<F::Item>,
    stopped: Option<StopReason>,
    pages: u64,
}

impl<F: PageFetcher> CursorStream<F> {
    /// Start a traversal at `start`
    pub fn new(fetcher: F, start: Cursor) -> Self {
        let direction = fetcher.direction();
        Self {
            fetcher,
            direction,
            current: start,
            last: None,
            buffer: VecDeque::new(),
            stopped: None,
            pages: 0,
        }
    }

    /// Cursor the next page will be requested with
    pub fn cursor(&self) -> Cursor {
        self.current
    }

    /// Cursor the previous page was requested with
    pub fn last_cursor(&self) -> Option<Cursor> {
        self.last
    }

    /// Direction of the traversal
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u64 {
        self.pages
    }

    /// Set once no further page will be fetched
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Next item, fetching a page first if the current one is used up.
    ///
    /// Returns `None` once the traversal is over. An error is returned at
    /// most once and ends the traversal.
    pub async fn next_item(&mut self) -> Option<Result<F::Item>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.stopped.is_some() {
                return None;
            }
            if let Err(e) = self.fetch_next_page().await {
                debug!(
                    "{} stream failed at cursor {}: {}",
                    self.direction, self.current, e
                );
                self.stopped = Some(StopReason::Failed);
                return Some(Err(e));
            }
        }
    }

    async fn fetch_next_page(&mut self) -> Result<()> {
        let batch = self.fetcher.fetch_page(self.current).await?;
        self.pages += 1;

        trace!(
            "{} page {} at cursor {}: {} items (atStart={}, atEnd={})",
            self.direction,
            self.pages,
            self.current,
            batch.len(),
            batch.at_start,
            batch.at_end
        );

        let Some(next) = batch.last_id() else {
            self.stop(StopReason::EmptyPage);
            return Ok(());
        };

        self.last = Some(self.current);
        self.current = next;

        if self.last == Some(self.current) {
            self.stop(StopReason::Stalled);
        } else if !self.direction.continues(&batch) {
            self.stop(StopReason::Boundary);
        }

        self.buffer.extend(batch.items);
        Ok(())
    }

    fn stop(&mut self, reason: StopReason) {
        debug!(
            "{} stream done after {} pages ({:?}), cursor {}",
            self.direction, self.pages, reason, self.current
        );
        self.stopped = Some(reason);
    }
}

impl<F: PageFetcher + 'static> CursorStream<F> {
    /// Turn the state machine into a `futures::Stream`
    pub fn into_stream(self) -> ItemStream<F::Item> {
        Box::pin(futures::stream::unfold(self, |mut state| async move {
            let item = state.next_item().await?;
            Some((item, state))
        }))
    }
}

impl<F: PageFetcher> std::fmt::Debug for CursorStream<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorStream")
            .field("direction", &self.direction)
            .field("current", &self.current)
            .field("last", &self.last)
            .field("buffered", &self.buffer.len())
            .field("stopped", &self.stopped)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}
