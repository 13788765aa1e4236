// src/core/html.rs
// Thin helpers over `scraper` so page specs read as a list of selectors.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

use super::sanitize::normalize_ws;

pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Concatenated text of the first match, whitespace left as-is.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(|el| el.text().collect())
}

/// Text of every match, whitespace-normalized, empties dropped.
pub fn all_texts(scope: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    scope
        .select(sel)
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn first_attr(doc: &Html, sel: &Selector, attr: &str) -> Option<String> {
    doc.select(sel).find_map(|el| el.value().attr(attr)).map(String::from)
}
