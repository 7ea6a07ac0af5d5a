//! The bounded collection loop

use super::ListAction;
use crate::action::{ApiAction, Transport};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Collection progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectState {
    /// More pages may be fetched
    Collecting,
    /// The limit was reached or the listing is exhausted
    Done,
}

/// Drives a listing action until a limit is reached or pages run out
///
/// The collector owns no cursor state of its own; it only consumes the
/// driven action's latch and request. The seen-set lives for one `collect`
/// call and is dropped with it.
#[derive(Debug)]
pub struct TitleCollector<'t, T: Transport + ?Sized> {
    transport: &'t T,
}

impl<'t, T: Transport + ?Sized> TitleCollector<'t, T> {
    /// Create a collector over a transport
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    /// Collect up to `limit` unique titles from the listing
    ///
    /// Titles keep the order of first appearance; a title repeated by the
    /// server is neither duplicated nor counted against the limit again.
    /// When the listing runs out before `limit`, the partial result is
    /// returned as success. The listing is walked from its first page on
    /// every call; a continuation cursor from a previous call is never
    /// resumed, so asking for more fresh titles than one walk yields may
    /// return fewer than `limit` even when the server holds more.
    ///
    /// Fails with [`Error::InvalidLimit`] for a zero limit before any page
    /// is fetched; `MalformedResponse` and transport errors propagate
    /// unchanged.
    pub fn collect(&self, action: &mut dyn ListAction, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Err(Error::InvalidLimit { limit });
        }

        action.reset();
        let mut titles: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut state = CollectState::Collecting;

        while state == CollectState::Collecting {
            if !action.has_more() {
                state = CollectState::Done;
                continue;
            }

            let body = self.transport.execute(&action.request())?;
            let page = action.parse_page(&body)?;
            trace!(page_titles = page.len(), "fetched listing page");

            for title in page {
                if seen.insert(title.clone()) {
                    titles.push(title);
                    if titles.len() == limit {
                        state = CollectState::Done;
                        break;
                    }
                }
            }
        }

        debug!(collected = titles.len(), limit, "title collection finished");
        Ok(titles)
    }
}
