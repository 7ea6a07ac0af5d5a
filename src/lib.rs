//! # wikibotkit
//!
//! A minimal, Rust-native toolkit for building MediaWiki query bots.
//!
//! Talks to a wiki's query API across many incompatible server versions:
//! every action validates the connected version at construction time, and
//! paged listings are collected into exact-size, duplicate-free title lists.
//!
//! ## Features
//!
//! - **Version Gating**: actions declare supported server versions and fail
//!   fast before any network interaction
//! - **Bounded Pagination**: walk a paged listing and keep exactly the first
//!   `limit` unique titles, in server order
//! - **XML Responses**: structured element access over the API's XML format
//! - **Blocking Transport**: retries, backoff, and rate limiting built in
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wikibotkit::mediawiki::NS_MAIN;
//! use wikibotkit::query::UnreviewedPagesTitles;
//! use wikibotkit::{Bot, Result, Version};
//!
//! fn main() -> Result<()> {
//!     let mut bot = Bot::new("https://wiki.example/w/api.php");
//!     bot.set_version(Version::latest());
//!
//!     let mut listing = UnreviewedPagesTitles::new(bot.version(), &[NS_MAIN])?;
//!     for title in bot.collect(&mut listing, 15)? {
//!         println!("{title}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                            Bot                              │
//! │      version() → Version      collect(listing, limit)       │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬───────────┬──────┴──────┬───────────┬───────────┐
//! │  Version  │  Action   │    Query    │    XML    │   HTTP    │
//! ├───────────┼───────────┼─────────────┼───────────┼───────────┤
//! │ Ordering  │ Request   │ Collector   │ Elements  │ GET       │
//! │ Registry  │ Latch     │ Dedupe      │ parse_root│ Retry     │
//! │ Compat    │ Process   │ Listings    │           │ Rate limit│
//! └───────────┴───────────┴─────────────┴───────────┴───────────┘
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

/// Error types for the toolkit
pub mod error;

/// Server version model and supported-version resolution
pub mod version;

/// MediaWiki constants and text helpers
pub mod mediawiki;

/// XML response parsing
pub mod xml;

/// API action contracts
pub mod action;

/// Paginated title queries
pub mod query;

/// Blocking HTTP transport with retry and rate limiting
pub mod http;

/// Bot configuration
pub mod config;

/// Bot facade
pub mod bot;

// ============================================================================
// Re-exports
// ============================================================================

pub use bot::Bot;
pub use config::BotConfig;
pub use error::{Error, Result};
pub use version::{Release, Version};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
