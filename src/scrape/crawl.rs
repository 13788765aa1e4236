// src/scrape/crawl.rs
use std::collections::HashSet;
use std::path::PathBuf;

use url::Url;

use crate::{
    config::options::CrawlOptions,
    core::{html, net::Fetcher},
    data::RawQuote,
    error::{Error, Result},
    progress::Progress,
    specs::{quotes::QuotesPage, PageSpec},
    store,
};

/// Anything that can hand back a page body for a URL.
/// The network fetcher in production, canned pages in tests.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl PageSource for Fetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.get(url.as_str())
    }
}

pub struct CrawlSummary {
    pub pages: usize,
    pub quotes: usize,
    pub out_path: PathBuf,
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::Url { url: s!(raw), source })
}

/// Walk the listing from `start_url`, following "next" until there is none.
/// Any fetch or parse error aborts the whole crawl.
pub fn collect_quotes(
    source: &dyn PageSource,
    spec: &dyn PageSpec,
    start_url: &str,
    max_pages: Option<usize>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Vec<RawQuote>, usize)> {
    let mut url = parse_url(start_url)?;
    let mut seen: HashSet<Url> = HashSet::new();
    let mut out: Vec<RawQuote> = Vec::new();
    let mut pages = 0usize;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(url.as_str());
    }
    logf!("Crawl: begin spec={} url={}", spec.name(), url);

    loop {
        if max_pages.is_some_and(|max| pages >= max) {
            logf!("Crawl: page limit {} reached", pages);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Page limit ({pages}) reached, stopping"));
            }
            break;
        }
        if !seen.insert(url.clone()) {
            logd!("Crawl: {} already visited, stopping", url);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{url} already visited, stopping"));
            }
            break;
        }

        let body = source.fetch(&url)?;
        let doc = html::parse_document(&body);
        let bundle = spec.extract(&doc)?;
        pages += 1;

        logd!("Crawl: page {} {} → {} quotes", pages, url, bundle.quotes.len());
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(pages, url.as_str(), bundle.quotes.len());
        }
        out.extend(bundle.quotes);

        let Some(href) = bundle.next else { break };
        url = url
            .join(&href)
            .map_err(|source| Error::Url { url: href.clone(), source })?;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(out.len());
    }
    logf!("Crawl: done pages={} quotes={}", pages, out.len());

    Ok((out, pages))
}

/// Crawl with the given page source and write the raw file.
pub fn crawl_with(
    source: &dyn PageSource,
    opts: &CrawlOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary> {
    let spec = QuotesPage::new()?;
    let (quotes, pages) = collect_quotes(source, &spec, &opts.start_url, opts.max_pages, progress)?;

    store::write_raw(&opts.out_path, &quotes)?;
    logf!("Store: wrote {} raw quotes → {}", quotes.len(), opts.out_path.display());

    Ok(CrawlSummary { pages, quotes: quotes.len(), out_path: opts.out_path.clone() })
}

/// Full collector run over the network.
pub fn crawl(opts: &CrawlOptions, progress: Option<&mut dyn Progress>) -> Result<CrawlSummary> {
    let fetcher = Fetcher::new(opts.timeout)?;
    crawl_with(&fetcher, opts, progress)
}
