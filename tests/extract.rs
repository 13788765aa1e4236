// tests/extract.rs
//
// Page spec + crawl loop against saved pages, no network.
//
use std::cell::RefCell;
use std::collections::HashMap;

use quotes_scrape::{
    config::options::CrawlOptions,
    core::html::parse_document,
    error::{Error, Result},
    progress::Progress,
    scrape::{self, PageSource},
    specs::{quotes::QuotesPage, PageSpec},
    store,
};
use url::Url;

const PAGE1: &str = include_str!("fixtures/page1.html");
const PAGE2: &str = include_str!("fixtures/page2.html");
const START: &str = "http://quotes.test/";

/// Serves canned bodies by URL; anything else is a 404.
struct Fixtures {
    pages: HashMap<String, &'static str>,
    hits: RefCell<Vec<String>>,
}

impl Fixtures {
    fn new(pages: &[(&str, &'static str)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, b)| (u.to_string(), *b)).collect(),
            hits: RefCell::new(Vec::new()),
        }
    }
}

impl PageSource for Fixtures {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.hits.borrow_mut().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(body) => Ok(body.to_string()),
            None => Err(Error::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            }),
        }
    }
}

#[derive(Default)]
struct Recorder {
    pages: Vec<(usize, usize)>,
    total: Option<usize>,
}

impl Progress for Recorder {
    fn page_done(&mut self, page_no: usize, _url: &str, found: usize) {
        self.pages.push((page_no, found));
    }
    fn finish(&mut self, total: usize) {
        self.total = Some(total);
    }
}

#[test]
fn first_page_fields_and_next_link() {
    let spec = QuotesPage::new().unwrap();
    let bundle = spec.extract(&parse_document(PAGE1)).unwrap();

    assert_eq!(bundle.quotes.len(), 3);
    assert_eq!(bundle.next.as_deref(), Some("/page/2/"));

    let q = &bundle.quotes[0];
    assert!(q.text.as_deref().unwrap().starts_with('“'));
    assert_eq!(q.author.as_deref(), Some("Albert Einstein"));
    assert_eq!(q.tags, vec!["change", "deep-thoughts", "thinking", "world"]);

    assert_eq!(bundle.quotes[1].tags, vec!["abilities", "choices"]);
}

#[test]
fn last_page_has_no_next_and_tolerates_missing_fields() {
    let spec = QuotesPage::new().unwrap();
    let bundle = spec.extract(&parse_document(PAGE2)).unwrap();

    assert_eq!(bundle.next, None);
    assert_eq!(bundle.quotes.len(), 2);
    assert!(bundle.quotes[0].text.as_deref().unwrap().contains('\n'));

    let bare = &bundle.quotes[1];
    assert_eq!(bare.author, None);
    assert!(bare.tags.is_empty());
}

#[test]
fn crawl_follows_next_until_exhausted() {
    let src = Fixtures::new(&[(START, PAGE1), ("http://quotes.test/page/2/", PAGE2)]);
    let spec = QuotesPage::new().unwrap();
    let mut rec = Recorder::default();

    let (quotes, pages) =
        scrape::collect_quotes(&src, &spec, START, None, Some(&mut rec)).unwrap();

    assert_eq!(pages, 2);
    assert_eq!(quotes.len(), 5);
    assert_eq!(rec.pages, vec![(1, 3), (2, 2)]);
    assert_eq!(rec.total, Some(5));
    assert_eq!(*src.hits.borrow(), vec![START, "http://quotes.test/page/2/"]);
}

#[test]
fn crawl_stops_on_page_limit() {
    let src = Fixtures::new(&[(START, PAGE1), ("http://quotes.test/page/2/", PAGE2)]);
    let spec = QuotesPage::new().unwrap();

    let (quotes, pages) = scrape::collect_quotes(&src, &spec, START, Some(1), None).unwrap();
    assert_eq!(pages, 1);
    assert_eq!(quotes.len(), 3);
    assert_eq!(src.hits.borrow().len(), 1);
}

#[test]
fn crawl_never_fetches_a_page_twice() {
    // page 2 served at the start URL too, so "next" loops back on itself
    let looping = PAGE1.replace("/page/2/", "/");
    let looping: &'static str = Box::leak(looping.into_boxed_str());
    let src = Fixtures::new(&[(START, looping)]);
    let spec = QuotesPage::new().unwrap();

    let (quotes, pages) = scrape::collect_quotes(&src, &spec, START, None, None).unwrap();
    assert_eq!(pages, 1);
    assert_eq!(quotes.len(), 3);
}

#[test]
fn fetch_error_aborts_whole_crawl() {
    // next page missing → 404 on page 2
    let src = Fixtures::new(&[(START, PAGE1)]);
    let spec = QuotesPage::new().unwrap();

    let err = scrape::collect_quotes(&src, &spec, START, None, None).unwrap_err();
    match err {
        Error::Status { url, status } => {
            assert_eq!(url, "http://quotes.test/page/2/");
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn crawl_with_writes_raw_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("quotes.json");
    let src = Fixtures::new(&[(START, PAGE1), ("http://quotes.test/page/2/", PAGE2)]);

    let opts = CrawlOptions { start_url: START.into(), out_path: out.clone(), ..Default::default() };
    let summary = scrape::crawl_with(&src, &opts, None).unwrap();

    assert_eq!(summary.quotes, 5);
    let back = store::read_raw(&out).unwrap();
    assert_eq!(back.len(), 5);
    assert_eq!(back[4].author, None);
}

#[test]
fn bad_start_url_is_an_error() {
    let src = Fixtures::new(&[]);
    let spec = QuotesPage::new().unwrap();
    let err = scrape::collect_quotes(&src, &spec, "not a url", None, None).unwrap_err();
    assert!(matches!(err, Error::Url { .. }));
    assert!(src.hits.borrow().is_empty());
}
