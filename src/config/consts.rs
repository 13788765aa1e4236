// src/config/consts.rs

// Net config
pub const START_URL: &str = "http://quotes.toscrape.com/";
pub const USER_AGENT: &str = concat!("quotes_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Provenance stamped on every normalized record
pub const SOURCE: &str = "quotes.toscrape.com";

// Data files
pub const RAW_FILE: &str = "data/quotes.json";
pub const NORMALIZED_FILE: &str = "data/quotes_normalized.json";
pub const LOG_FILE: &str = "data/debug.log";

// Normalize
pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

// Viewer
pub const APP_TITLE: &str = "Random Quote Generator";
pub const REVEAL_DELAY_MS: u64 = 20;
pub const EMPTY_NOTICE: &str = "No quotes match the selected tags.";
pub const SIDEBAR_CAPTION: &str = "Quotes update only from pre-scraped data.";
