//! Progress accounting shared by all extraction backends.
//!
//! The tracker owns the counters; rendering lives behind [`ProgressSink`] so
//! the extraction pipeline can be exercised without a DOM.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives progress updates from the extraction pipeline.
pub trait ProgressSink {
    /// New completion percentage in `[0, 100]`; implementations round for
    /// display.
    fn update(&self, percent: f64);

    /// Replace the status line.
    fn update_message(&self, text: &str);
}

/// Counts completed pages and converts the count to a percentage.
///
/// Completion order does not matter: each completed page advances the count
/// by one, so the percentage never decreases and reaches exactly 100 when
/// the last page of the document completes.
pub struct ProgressTracker {
    done: AtomicUsize,
    total: usize,
}

impl ProgressTracker {
    /// Tracker for a document with `total` pages. Zero-page documents are
    /// rejected before a tracker is ever created.
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "tracker requires at least one page");
        Self {
            done: AtomicUsize::new(0),
            total,
        }
    }

    /// Record one completed page and return the updated percentage.
    pub fn advance(&self) -> f64 {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        (done.min(self.total) as f64 / self.total as f64) * 100.0
    }

    /// Pages completed so far.
    pub fn completed(&self) -> usize {
        self.done.load(Ordering::Relaxed).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressTracker;

    #[test]
    fn advances_monotonically_to_exactly_one_hundred() {
        let tracker = ProgressTracker::new(3);
        let mut previous = 0.0;
        for _ in 0..3 {
            let percent = tracker.advance();
            assert!(percent >= previous);
            previous = percent;
        }
        assert_eq!(previous, 100.0);
        assert_eq!(tracker.completed(), 3);
    }

    #[test]
    fn rounded_percentages_for_three_pages() {
        let tracker = ProgressTracker::new(3);
        assert_eq!(tracker.advance().round() as u32, 33);
        assert_eq!(tracker.advance().round() as u32, 67);
        assert_eq!(tracker.advance().round() as u32, 100);
    }

    #[test]
    fn single_page_document_jumps_to_one_hundred() {
        let tracker = ProgressTracker::new(1);
        assert_eq!(tracker.advance(), 100.0);
    }
}
