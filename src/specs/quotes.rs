// src/specs/quotes.rs
//! Scraping *spec* for the quotes.toscrape.com listing pages.
//!
//! Markup, per quote:
//! ```html
//! <div class="quote">
//!   <span class="text">“…”</span>
//!   <span>by <small class="author">Albert Einstein</small> …</span>
//!   <div class="tags"><a class="tag" href="…">change</a> …</div>
//! </div>
//! ```
//! Pagination: `<li class="next"><a href="/page/2/">Next →</a></li>`, absent
//! on the last page.

use scraper::{Html, Selector};

use crate::core::html::{all_texts, first_attr, first_text, selector};
use crate::core::sanitize::normalize_ws;
use crate::data::RawQuote;
use crate::error::Result;

use super::{PageBundle, PageSpec};

pub struct QuotesPage {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    next: Selector,
}

impl QuotesPage {
    pub fn new() -> Result<Self> {
        Ok(Self {
            quote: selector("div.quote")?,
            text: selector("span.text")?,
            author: selector("small.author")?,
            tag: selector("div.tags a.tag")?,
            next: selector("li.next a")?,
        })
    }
}

impl PageSpec for QuotesPage {
    fn name(&self) -> &'static str { "quotes" }

    fn extract(&self, doc: &Html) -> Result<PageBundle> {
        let quotes = doc
            .select(&self.quote)
            .map(|block| RawQuote {
                text: first_text(block, &self.text),
                author: first_text(block, &self.author)
                    .map(|a| normalize_ws(&a))
                    .filter(|a| !a.is_empty()),
                tags: all_texts(block, &self.tag),
            })
            .collect();

        let next = first_attr(doc, &self.next, "href").filter(|h| !h.trim().is_empty());

        Ok(PageBundle { quotes, next })
    }
}
