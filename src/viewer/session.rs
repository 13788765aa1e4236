// src/viewer/session.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::data::{NormalizedQuote, QuoteTable};

/// Transient per-session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_tags: BTreeSet<String>,
    pub current_index: usize,
}

/// One viewer over a shared, read-only table.
///
/// The filtered row indices are recomputed only when the tag selection
/// changes. `current_index` always lies in `0..filtered_len()` when the
/// filtered set is non-empty, and is 0 otherwise.
#[derive(Clone, Debug)]
pub struct Session {
    table: Arc<QuoteTable>,
    state: FilterState,
    row_ix: Vec<usize>,
    // bumped on every step that re-renders the card
    revision: u64,
}

impl Session {
    pub fn new(table: Arc<QuoteTable>) -> Self {
        let row_ix = (0..table.len()).collect();
        Self { table, state: FilterState::default(), row_ix, revision: 0 }
    }

    pub fn index(&self) -> usize { self.state.current_index }
    pub fn active_tags(&self) -> &BTreeSet<String> { &self.state.active_tags }

    /// Changes on every filter change or navigation step, even when the same
    /// quote ends up on screen. Frontends replay the reveal when it moves.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn all_tags(&self) -> Vec<String> { self.table.all_tags() }

    pub fn filtered_len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn filtered(&self) -> impl Iterator<Item = &NormalizedQuote> + '_ {
        self.row_ix.iter().filter_map(|&i| self.table.get(i))
    }

    /// Replace the selection. Returns true if it actually changed, in which
    /// case the index goes back to 0.
    pub fn set_tags(&mut self, tags: BTreeSet<String>) -> bool {
        if tags == self.state.active_tags {
            return false;
        }
        self.row_ix = self.table.filter_ix(&tags);
        self.state.active_tags = tags;
        self.state.current_index = 0;
        self.revision += 1;
        logd!(
            "Session: tags={:?} → {} match(es)",
            self.state.active_tags,
            self.row_ix.len()
        );
        true
    }

    /// Flip one tag in or out of the selection.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let mut next = self.state.active_tags.clone();
        if !next.remove(tag) {
            next.insert(s!(tag));
        }
        self.set_tags(next)
    }

    pub fn clear_tags(&mut self) -> bool {
        self.set_tags(BTreeSet::new())
    }

    /// Step back one, wrapping to the end. No-op on an empty filtered set.
    pub fn prev(&mut self) {
        let n = self.filtered_len();
        if n == 0 { return; }
        self.state.current_index = (self.state.current_index % n + n - 1) % n;
        self.revision += 1;
    }

    /// Step forward one, wrapping to the start. No-op on an empty filtered set.
    pub fn next(&mut self) {
        let n = self.filtered_len();
        if n == 0 { return; }
        self.state.current_index = (self.state.current_index + 1) % n;
        self.revision += 1;
    }

    /// Jump to `index` (any value; reduced modulo the filtered count).
    pub fn seek(&mut self, index: usize) {
        let n = self.filtered_len();
        self.state.current_index = if n == 0 { 0 } else { index % n };
        self.revision += 1;
    }

    /// The quote to show, or `None` when nothing matches the selection.
    pub fn current(&self) -> Option<&NormalizedQuote> {
        let n = self.filtered_len();
        if n == 0 { return None; }
        let row = self.row_ix[self.state.current_index % n];
        self.table.get(row)
    }
}
