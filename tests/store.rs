// tests/store.rs
use std::fs;
use std::sync::Arc;

use quotes_scrape::{data::NormalizedQuote, error::Error, store};

fn q(id: &str) -> NormalizedQuote {
    NormalizedQuote {
        id: id.into(),
        text: "Ünïcödé “kept”".into(),
        author: "A".into(),
        tags: vec!["t".into()],
        source: "quotes.toscrape.com".into(),
    }
}

#[test]
fn normalized_file_keeps_non_ascii_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("n.json");
    store::write_normalized(&path, &[q("1"), q("2")]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Ünïcödé"));
    assert!(text.trim_start().starts_with('['));
    assert!(!dir.path().join("nested").join("n.json.tmp").exists());

    let back = store::read_normalized(&path).unwrap();
    assert_eq!(back, vec![q("1"), q("2")]);
}

#[test]
fn table_is_loaded_once_per_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("n.json");
    store::write_normalized(&path, &[q("1")]).unwrap();

    let first = store::load_table(&path).unwrap();

    // content changes on disk are not picked up
    store::write_normalized(&path, &[q("1"), q("2")]).unwrap();
    let second = store::load_table(&path).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 1);
}

#[test]
fn missing_normalized_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = store::load_table(&path).unwrap_err();
    assert!(matches!(err, Error::MissingInput { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn empty_raw_file_is_an_empty_set() {
    assert!(store::parse_raw("   \n").unwrap().is_empty());
}
