//! Statistics gathered during a crawl run
//!
//! The crawl loop updates a [`CrawlStatistics`] as it goes; the summary is
//! printed to stderr once the run terminates.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Why the crawl loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// No URLs left to visit
    FrontierExhausted,
    /// The visited-page budget was reached
    BudgetReached,
}

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the crawl loop started
    pub started_at: DateTime<Utc>,

    /// When the crawl loop terminated
    pub finished_at: Option<DateTime<Utc>>,

    /// URLs that completed a fetch attempt, successful or not
    pub pages_visited: u64,

    /// Fetch attempts that failed (timeout, connection, non-2xx)
    pub fetch_failures: u64,

    /// Fetched pages rejected for having too little text
    pub too_short: u64,

    /// Fetched pages rejected as duplicates of an accepted page
    pub duplicates: u64,

    /// Pages turned into records
    pub records_accepted: u64,

    /// Internal links newly added to the frontier
    pub links_enqueued: u64,

    /// URLs still queued when the loop stopped
    pub frontier_remaining: u64,

    /// Set once the loop has stopped
    pub termination: Option<TerminationReason>,
}

impl CrawlStatistics {
    /// Starts a fresh statistics record stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_visited: 0,
            fetch_failures: 0,
            too_short: 0,
            duplicates: 0,
            records_accepted: 0,
            links_enqueued: 0,
            frontier_remaining: 0,
            termination: None,
        }
    }

    /// Stamps the end of the run
    pub fn finish(&mut self, reason: TerminationReason, frontier_remaining: usize) {
        self.finished_at = Some(Utc::now());
        self.termination = Some(reason);
        self.frontier_remaining = frontier_remaining as u64;
    }

    /// Wall-clock duration of the run in seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }
}

/// Formats statistics as a human-readable block
pub fn render_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Crawl Statistics ===");
    let _ = writeln!(out, "  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        let _ = writeln!(out, "  Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = stats.duration_seconds() {
        let _ = writeln!(out, "  Duration: {:.1}s", seconds);
    }
    if let Some(reason) = stats.termination {
        let reason = match reason {
            TerminationReason::FrontierExhausted => "frontier exhausted",
            TerminationReason::BudgetReached => "page budget reached",
        };
        let _ = writeln!(out, "  Stopped: {}", reason);
    }

    let _ = writeln!(out, "  Pages visited: {}", stats.pages_visited);
    let _ = writeln!(out, "  Fetch failures: {}", stats.fetch_failures);
    let _ = writeln!(out, "  Too short: {}", stats.too_short);
    let _ = writeln!(out, "  Duplicates: {}", stats.duplicates);
    let _ = writeln!(out, "  Records written: {}", stats.records_accepted);
    let _ = writeln!(out, "  Links enqueued: {}", stats.links_enqueued);
    let _ = writeln!(out, "  Left in frontier: {}", stats.frontier_remaining);

    let acceptance = if stats.pages_visited > 0 {
        (stats.records_accepted as f64 / stats.pages_visited as f64) * 100.0
    } else {
        0.0
    };
    let _ = writeln!(
        out,
        "  Acceptance Rate: {:.1}% ({} / {} pages recorded)",
        acceptance, stats.records_accepted, stats.pages_visited
    );

    out
}

/// Prints statistics to stderr in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    eprint!("{}", render_statistics(stats));
}
