// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    pub start_url: String,
    pub out_path: PathBuf,
    /// Stop after this many pages. `None` follows "next" until it runs out.
    pub max_pages: Option<usize>,
    pub timeout: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            start_url: s!(START_URL),
            out_path: PathBuf::from(RAW_FILE),
            max_pages: None,
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(RAW_FILE),
            output: PathBuf::from(NORMALIZED_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerOptions {
    pub data_path: PathBuf,
    pub reveal_delay: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(NORMALIZED_FILE),
            reveal_delay: Duration::from_millis(REVEAL_DELAY_MS),
        }
    }
}
