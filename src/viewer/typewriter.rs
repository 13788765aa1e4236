// src/viewer/typewriter.rs
use std::time::{Duration, Instant};

/// Per-character reveal driven by wall time. Holds no text itself, so the
/// frontend can keep drawing whatever quote is current.
#[derive(Clone, Debug)]
pub struct Typewriter {
    started: Instant,
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { started: Instant::now(), delay }
    }

    /// Start over from zero characters.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    pub fn delay(&self) -> Duration { self.delay }

    /// Characters visible `elapsed` after start, capped at `total`.
    pub fn visible_at(&self, elapsed: Duration, total: usize) -> usize {
        if self.delay.is_zero() {
            return total;
        }
        let n = elapsed.as_millis() / self.delay.as_millis().max(1);
        usize::try_from(n).unwrap_or(usize::MAX).min(total)
    }

    /// Revealed prefix of `text` at `elapsed`. Never splits a char.
    pub fn reveal_at<'t>(&self, text: &'t str, elapsed: Duration) -> &'t str {
        let total = text.chars().count();
        let shown = self.visible_at(elapsed, total);
        match text.char_indices().nth(shown) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    pub fn reveal<'t>(&self, text: &'t str) -> &'t str {
        self.reveal_at(text, self.started.elapsed())
    }

    pub fn is_done(&self, text: &str) -> bool {
        self.reveal(text).len() == text.len()
    }
}
