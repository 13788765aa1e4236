// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules. A spec knows *where the data lives in the
//! HTML* of one kind of page and nothing else.
//!
//! ## What lives here
//! - **Pure document reading**: a spec gets an already-parsed `scraper::Html`
//!   and returns records plus the raw `href` of the next page, if any.
//! - **Selector choice** for the page.
//!
//! ## What does **not** live here
//! - **Networking**, URL resolution and the page loop (`scrape::crawl`).
//! - **Persistence** (`store`) and **cleanup** (`normalize`). Specs return
//!   text as found on the page, quote marks and all.
//!
//! ## Typical call chain
//! ```text
//! CLI → scrape::crawl → core::net::Fetcher::get
//!                     ↘ specs::<page>.extract(&doc) → PageBundle
//!                     ↘ store::write_raw (after the last page)
//! ```
//!
//! ## Testing notes
//! Specs are testable offline against saved HTML (see `tests/fixtures`).
use scraper::Html;

use crate::data::RawQuote;
use crate::error::Result;

pub mod quotes;

/// What one page yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageBundle {
    pub quotes: Vec<RawQuote>,
    /// `href` of the "next" link exactly as written on the page.
    pub next: Option<String>,
}

pub trait PageSpec {
    fn name(&self) -> &'static str;

    fn extract(&self, doc: &Html) -> Result<PageBundle>;
}
