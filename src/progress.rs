// src/progress.rs
/// Lightweight progress reporting for the crawl.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first request.
    fn begin(&mut self, _start_url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page fetched and parsed; `found` quotes on it.
    fn page_done(&mut self, _page_no: usize, _url: &str, _found: usize) {}

    /// Called at the end of a successful crawl.
    fn finish(&mut self, _total: usize) {}
}
