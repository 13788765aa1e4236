// src/cli.rs
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::options::{CrawlOptions, NormalizeOptions, ViewerOptions},
    log::{self, LogSink},
    normalize,
    progress::Progress,
    scrape, store,
    viewer::{Card, Session},
};

#[derive(Parser)]
#[command(name = "quotes-cli", about = "Scrape, normalize and inspect quotes.toscrape.com quotes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the listing and write the raw quotes file
    Crawl {
        /// First page of the listing
        #[arg(long)]
        start_url: Option<String>,
        /// Raw output file
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Stop after this many pages
        #[arg(short = 'n', long)]
        max_pages: Option<usize>,
    },
    /// Clean the raw file into the normalized record set
    Normalize {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Crawl + normalize with default paths
    Run,
    /// Print every tag in the normalized set, sorted
    Tags {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Render one quote of the filtered set as an HTML card
    Card {
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Required tag (repeatable); quotes must carry all of them
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Position in the filtered set (wraps around)
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Write here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Status lines on stderr so stdout stays clean for data.
#[derive(Default)]
pub struct CliProgress {
    pages: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, start_url: &str) {
        eprintln!("Crawling from {start_url}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page_no: usize, url: &str, found: usize) {
        self.pages = page_no;
        eprintln!("  page {page_no}: {found} quotes ({url})");
    }
    fn finish(&mut self, total: usize) {
        eprintln!("Crawl complete: {total} quotes from {} page(s)", self.pages);
    }
}

pub fn run() -> Result<()> {
    log::init(LogSink::Stderr);
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl { start_url, out, max_pages } => {
            let mut opts = CrawlOptions::default();
            if let Some(u) = start_url { opts.start_url = u; }
            if let Some(o) = out { opts.out_path = o; }
            opts.max_pages = max_pages;
            crawl(&opts)
        }
        Commands::Normalize { input, out } => {
            let mut opts = NormalizeOptions::default();
            if let Some(i) = input { opts.input = i; }
            if let Some(o) = out { opts.output = o; }
            run_normalize(&opts)
        }
        Commands::Run => {
            crawl(&CrawlOptions::default())?;
            run_normalize(&NormalizeOptions::default())
        }
        Commands::Tags { data } => {
            let opts = viewer_opts(data);
            let table = store::load_table(&opts.data_path)?;
            for tag in table.all_tags() {
                println!("{tag}");
            }
            Ok(())
        }
        Commands::Card { data, tags, index, out } => {
            let opts = viewer_opts(data);
            card(&opts, tags, index, out)
        }
    }
}

fn viewer_opts(data: Option<PathBuf>) -> ViewerOptions {
    let mut opts = ViewerOptions::default();
    if let Some(d) = data { opts.data_path = d; }
    opts
}

fn crawl(opts: &CrawlOptions) -> Result<()> {
    let mut progress = CliProgress::default();
    let summary = scrape::crawl(opts, Some(&mut progress))
        .wrap_err_with(|| format!("crawl from {} failed", opts.start_url))?;
    println!(
        "Wrote {} quotes ({} pages) → {}",
        summary.quotes,
        summary.pages,
        summary.out_path.display()
    );
    Ok(())
}

fn run_normalize(opts: &NormalizeOptions) -> Result<()> {
    let summary = normalize::run(opts)?;
    println!("Normalized {} quotes → {}", summary.count, summary.out_path.display());
    Ok(())
}

fn card(opts: &ViewerOptions, tags: Vec<String>, index: usize, out: Option<PathBuf>) -> Result<()> {
    let table = store::load_table(&opts.data_path)?;
    let mut session = Session::new(table);
    session.set_tags(tags.into_iter().collect::<BTreeSet<_>>());
    session.seek(index);

    let Some(quote) = session.current() else {
        eprintln!("{}", crate::config::consts::EMPTY_NOTICE);
        return Ok(());
    };
    let html = Card::from(quote).to_html(opts.reveal_delay);

    match out {
        Some(path) => {
            store::ensure_parent(&path)?;
            fs::write(&path, html).wrap_err_with(|| format!("writing {}", path.display()))?;
            eprintln!("Card {}/{} → {}", session.index() + 1, session.filtered_len(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
