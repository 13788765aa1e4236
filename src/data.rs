// src/data.rs
//
// Record shapes for each pipeline stage, plus the read-only table the viewer
// works against.
//
// - RawQuote:        what the collector emits, one per quote block.
// - NormalizedQuote: what the normalizer writes and the viewer reads.
// - QuoteTable:      loaded once, never mutated; filtering produces row indices.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

/// One scraped quote, as found on the page. Every field is optional on the
/// way in so that half-broken records still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// `"tags": null` reads the same as a missing key.
fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: String,
}

impl NormalizedQuote {
    /// True if every tag in `selected` is on this quote.
    pub fn has_all_tags(&self, selected: &BTreeSet<String>) -> bool {
        if selected.is_empty() {
            return true;
        }
        let own: HashSet<&str> = self.tags.iter().map(String::as_str).collect();
        selected.iter().all(|t| own.contains(t.as_str()))
    }
}

/// Authoritative, immutable quote set.
#[derive(Clone, Debug, Default)]
pub struct QuoteTable {
    quotes: Vec<NormalizedQuote>,
}

impl QuoteTable {
    pub fn new(quotes: Vec<NormalizedQuote>) -> Self { Self { quotes } }

    pub fn len(&self) -> usize { self.quotes.len() }
    pub fn is_empty(&self) -> bool { self.quotes.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&NormalizedQuote> { self.quotes.get(ix) }

    /// Union of all tags, sorted, no duplicates.
    pub fn all_tags(&self) -> Vec<String> {
        all_tags(&self.quotes)
    }

    /// Row indices of the quotes carrying every selected tag, in table order.
    /// An empty selection keeps every row.
    pub fn filter_ix(&self, selected: &BTreeSet<String>) -> Vec<usize> {
        self.quotes
            .iter()
            .enumerate()
            .filter(|(_, q)| q.has_all_tags(selected))
            .map(|(i, _)| i)
            .collect()
    }
}

pub fn all_tags(quotes: &[NormalizedQuote]) -> Vec<String> {
    let set: BTreeSet<&str> = quotes
        .iter()
        .flat_map(|q| q.tags.iter().map(String::as_str))
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Keep only quotes whose tag set is a superset of `selected`, order preserved.
pub fn filter_by_tags<'a>(
    quotes: &'a [NormalizedQuote],
    selected: &BTreeSet<String>,
) -> Vec<&'a NormalizedQuote> {
    quotes.iter().filter(|q| q.has_all_tags(selected)).collect()
}
