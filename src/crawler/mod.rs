//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with explicit failure outcomes
//! - Visible text and link extraction
//! - Content deduplication
//! - The breadth-first frontier
//! - Overall crawl coordination

mod coordinator;
mod dedup;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlReport, Crawler};
pub use dedup::{Deduplicator, Fingerprint, Verdict};
pub use fetcher::{
    build_http_client, fetch_url, FailureKind, FetchFailure, FetchOutcome, Fetcher, HttpFetcher,
};
pub use frontier::Frontier;
pub use parser::{extract_page, normalize_whitespace, ExtractedPage, EXCLUDED_ELEMENTS};

pub use crate::output::PageRecord;

use crate::config::Config;
use crate::url::parse_seed_url;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the seed URL
/// 2. Build the HTTP client
/// 3. Walk the site breadth-first from the seed
/// 4. Return the accepted pages and run statistics
///
/// # Arguments
///
/// * `seed` - Absolute http(s) URL to start from
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (individual pages may have failed)
/// * `Err(CrawlError)` - The run could not start
pub async fn crawl(seed: &str, config: &Config) -> Result<CrawlReport, CrawlError> {
    let seed = parse_seed_url(seed)?;
    let crawler = Crawler::from_config(seed, config)?;
    Ok(crawler.run().await)
}
