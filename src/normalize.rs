// src/normalize.rs
//
// Raw → normalized. Each record is handled on its own; the only shared
// thing is the provenance label.

use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    config::{
        consts::{SOURCE, UNKNOWN_AUTHOR},
        options::NormalizeOptions,
    },
    core::sanitize::clean_text,
    data::{NormalizedQuote, RawQuote},
    error::Result,
    store,
};

#[derive(Debug)]
pub struct NormalizeSummary {
    pub count: usize,
    pub out_path: PathBuf,
}

/// Clean one record and give it a fresh id. The id does not depend on the
/// content, so identical inputs still get distinct ids.
pub fn normalize_quote(raw: &RawQuote) -> NormalizedQuote {
    let author = raw
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR);

    NormalizedQuote {
        id: Uuid::new_v4().to_string(),
        text: clean_text(raw.text.as_deref().unwrap_or_default()),
        author: s!(author),
        tags: raw.tags.clone(),
        source: s!(SOURCE),
    }
}

pub fn normalize_all(raw: &[RawQuote]) -> Vec<NormalizedQuote> {
    raw.iter().map(normalize_quote).collect()
}

/// Read the raw file, normalize everything, write the result in one go.
/// A missing input file is fatal.
pub fn run(opts: &NormalizeOptions) -> Result<NormalizeSummary> {
    let raw = store::read_raw(&opts.input)?;
    logd!("Normalize: read {} raw quotes from {}", raw.len(), opts.input.display());

    let normalized = normalize_all(&raw);
    store::write_normalized(&opts.output, &normalized)?;

    logf!("Normalize: {} quotes → {}", normalized.len(), opts.output.display());
    Ok(NormalizeSummary { count: normalized.len(), out_path: opts.output.clone() })
}
