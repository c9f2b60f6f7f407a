//! Output handler traits and types
//!
//! This module defines the trait interface for output sinks and the record
//! type the crawler hands to them.

use std::collections::BTreeSet;
use thiserror::Error;
use url::Url;

/// Separator between URLs in a joined link column
pub const LINK_SEPARATOR: &str = ";";

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One accepted page
///
/// Records are built once by the crawl loop and never mutated afterwards.
/// Link sets are ordered, so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    url: Url,
    text: String,
    internal_links: BTreeSet<Url>,
    external_links: BTreeSet<Url>,
}

impl PageRecord {
    pub fn new(
        url: Url,
        text: String,
        internal_links: BTreeSet<Url>,
        external_links: BTreeSet<Url>,
    ) -> Self {
        Self {
            url,
            text,
            internal_links,
            external_links,
        }
    }

    /// The URL the page was requested under
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Normalized visible text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Same-authority links, sorted
    pub fn internal_links(&self) -> &BTreeSet<Url> {
        &self.internal_links
    }

    /// Other-authority links, sorted
    pub fn external_links(&self) -> &BTreeSet<Url> {
        &self.external_links
    }

    /// Internal links joined with `;`, empty if none
    pub fn internal_links_joined(&self) -> String {
        join_links(&self.internal_links)
    }

    /// External links joined with `;`, empty if none
    pub fn external_links_joined(&self) -> String {
        join_links(&self.external_links)
    }
}

fn join_links(links: &BTreeSet<Url>) -> String {
    links
        .iter()
        .map(Url::as_str)
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR)
}

/// Trait for output sinks
///
/// Implementations receive records in discovery order.
pub trait OutputHandler {
    /// Appends one record
    fn write_record(&mut self, record: &PageRecord) -> OutputResult<()>;

    /// Flushes anything buffered; called once after the last record
    fn finish(&mut self) -> OutputResult<()>;

    /// Writes every record, then finishes
    fn write_all(&mut self, records: &[PageRecord]) -> OutputResult<()> {
        for record in records {
            self.write_record(record)?;
        }
        self.finish()
    }
}
