//! Paginated title queries
//!
//! # Overview
//!
//! The query module provides:
//! - `ListAction` - the contract for paged listing actions
//! - `TitleCollector` - the bounded, duplicate-free collection loop
//! - `AllPageTitles` / `UnreviewedPagesTitles` - concrete listings
//!
//! A collection walks pages sequentially through the transport, keeps titles
//! in first-seen order, and stops at the caller's limit or when the listing
//! is exhausted. Each call to [`TitleCollector::collect`] starts the listing
//! from its first page: server continuation cursors are never carried from
//! one call to the next, so two calls see the listing from the top.

mod actions;
mod collector;

pub use actions::{AllPageTitles, UnreviewedPagesTitles};
pub use collector::{CollectState, TitleCollector};

use crate::action::ApiAction;
use crate::error::Result;


/// A paged listing action the collector can drive
///
/// The page cursor, if the listing has one, is owned by the action: a page
/// parse may advance it and re-arm the latch, and [`reset`](ListAction::reset)
/// returns the action to its first page.
pub trait ListAction: ApiAction {
    /// Extract the page's titles in server order
    ///
    /// May advance the action's own page cursor and re-arm the latch when
    /// the server announced another page.
    fn parse_page(&mut self, body: &str) -> Result<Vec<String>>;

    /// Return to the first page, dropping any cursor
    fn reset(&mut self);
}
