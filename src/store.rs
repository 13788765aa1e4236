// src/store.rs
//
// Flat-file persistence for both pipeline stages. Writes go through a temp
// file in the target directory and a rename, so readers never see half a file.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock},
};

use serde::Serialize;

use crate::data::{NormalizedQuote, QuoteTable, RawQuote};
use crate::error::{Error, Result};

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;

    let mut body = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    body.push('\n');

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, body).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io(path, e))?;
    Ok(())
}

fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::MissingInput { path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_raw(path: &Path, quotes: &[RawQuote]) -> Result<()> {
    write_json_atomic(path, quotes)
}

/// Raw records as a JSON array, or one object per line (JSON Lines).
pub fn read_raw(path: &Path) -> Result<Vec<RawQuote>> {
    let text = read_existing(path)?;
    parse_raw(&text).map_err(|e| Error::json(path, e))
}

pub fn parse_raw(text: &str) -> serde_json::Result<Vec<RawQuote>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed);
    }
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(serde_json::from_str::<RawQuote>)
        .collect()
}

pub fn write_normalized(path: &Path, quotes: &[NormalizedQuote]) -> Result<()> {
    write_json_atomic(path, quotes)
}

pub fn read_normalized(path: &Path) -> Result<Vec<NormalizedQuote>> {
    let text = read_existing(path)?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

type TableCache = Mutex<HashMap<PathBuf, Arc<QuoteTable>>>;

static TABLES: OnceLock<TableCache> = OnceLock::new();

/// Load the normalized set once per path for the life of the process.
/// Later calls return the same table; the file is not re-read.
pub fn load_table(path: &Path) -> Result<Arc<QuoteTable>> {
    let cache = TABLES.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(hit) = cache.lock().ok().and_then(|c| c.get(path).cloned()) {
        logd!("Cache: hit {}", path.display());
        return Ok(hit);
    }

    let table = Arc::new(QuoteTable::new(read_normalized(path)?));
    logf!("Cache: loaded {} quotes from {}", table.len(), path.display());

    if let Ok(mut c) = cache.lock() {
        let kept = c.entry(path.to_path_buf()).or_insert_with(|| Arc::clone(&table));
        return Ok(Arc::clone(kept));
    }
    Ok(table)
}
