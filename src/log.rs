// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// CLI: human-facing, stderr.
    Stderr,
    /// GUI: no console to speak of, append to a file.
    File(&'a Path),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once; only the
/// first call has any effect.
pub fn init(sink: LogSink<'_>) {
    INIT.get_or_init(|| {
        let installed = match sink {
            LogSink::Stderr => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .is_ok(),
            LogSink::File(path) => match open_log_file(path) {
                Some(file) => tracing_subscriber::fmt()
                    .with_env_filter(filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init()
                    .is_ok(),
                None => false,
            },
        };
        if installed {
            logd!("Log: subscriber installed ({sink:?})");
        }
    });
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
