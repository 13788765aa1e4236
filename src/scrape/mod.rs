// src/scrape/mod.rs
mod crawl;

pub use crawl::{collect_quotes, crawl, crawl_with, CrawlSummary, PageSource};
