//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the pieces together:
//! - Taking URLs from the frontier in breadth-first order
//! - Fetching, extracting and deduplicating each page
//! - Classifying links and feeding internal ones back to the frontier
//! - Enforcing the page budget and the politeness delay
//!
//! All state is owned by one [`Crawler`] built fresh for each run.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::dedup::{Deduplicator, Verdict};
use crate::crawler::fetcher::{FetchOutcome, Fetcher, HttpFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_page;
use crate::output::{CrawlStatistics, PageRecord, TerminationReason};
use crate::url::{classify_links, extract_authority, Authority};
use crate::{CrawlError, UrlError};
use std::time::Duration;
use url::Url;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Accepted pages in discovery order
    pub records: Vec<PageRecord>,

    /// Counters for the run
    pub statistics: CrawlStatistics,
}

/// What happened to one dequeued URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageOutcome {
    FetchFailed,
    TooShort,
    Duplicate,
    Accepted,
}

/// Main crawler structure
pub struct Crawler<F: Fetcher> {
    fetcher: F,
    scope: Authority,
    frontier: Frontier,
    dedup: Deduplicator,
    delay: Duration,
    max_pages: Option<usize>,
    records: Vec<PageRecord>,
    stats: CrawlStatistics,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler backed by a real HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawlError)` - The seed has no host or the client could not be built
    pub fn from_config(seed: Url, config: &Config) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.crawler.request_timeout())?;
        Self::new(fetcher, seed, &config.crawler)
    }
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a crawler for `seed` using the given fetcher
    ///
    /// The seed's authority fixes the crawl scope for the whole run.
    pub fn new(fetcher: F, seed: Url, settings: &CrawlerConfig) -> Result<Self, CrawlError> {
        let scope = extract_authority(&seed).ok_or(UrlError::MissingHost)?;

        Ok(Self {
            fetcher,
            scope,
            frontier: Frontier::with_seed(seed),
            dedup: Deduplicator::new(settings.min_text_length),
            delay: settings.delay(),
            max_pages: settings.page_budget(),
            records: Vec::new(),
            stats: CrawlStatistics::start(),
        })
    }

    /// The authority links are compared against
    pub fn scope(&self) -> &Authority {
        &self.scope
    }

    /// Runs the crawl loop until the frontier empties or the budget is hit
    ///
    /// Per-page failures are logged and counted, never returned.
    pub async fn run(mut self) -> CrawlReport {
        tracing::info!(
            "Starting crawl of {} (budget: {}, delay: {:?})",
            self.scope,
            self.max_pages
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
            self.delay
        );

        let reason = loop {
            if self.budget_reached() {
                tracing::info!("Reached max pages limit ({})", self.frontier.visited_count());
                break TerminationReason::BudgetReached;
            }

            let url = match self.frontier.dequeue() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier is empty, crawl complete");
                    break TerminationReason::FrontierExhausted;
                }
            };

            if self.frontier.is_visited(&url) {
                tracing::debug!("Skipping already visited URL: {}", url);
                continue;
            }

            if self.process_url(url).await != PageOutcome::Accepted {
                continue;
            }

            if self.budget_reached() {
                tracing::info!("Reached max pages limit ({})", self.frontier.visited_count());
                break TerminationReason::BudgetReached;
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        };

        self.stats.finish(reason, self.frontier.len());

        tracing::info!(
            "Crawl finished: {} pages visited, {} records",
            self.stats.pages_visited,
            self.records.len()
        );

        CrawlReport {
            records: self.records,
            statistics: self.stats,
        }
    }

    /// Fetches, extracts and evaluates a single URL
    async fn process_url(&mut self, url: Url) -> PageOutcome {
        tracing::debug!("Fetching URL: {}", url);
        let outcome = self.fetcher.fetch(&url).await;

        self.frontier.mark_visited(&url);
        self.stats.pages_visited += 1;

        let body = match outcome {
            FetchOutcome::Success {
                final_url, body, ..
            } => {
                if final_url != url.as_str() {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                body
            }
            FetchOutcome::Failure(failure) => {
                tracing::warn!("Failed to fetch {}: {}", url, failure);
                self.stats.fetch_failures += 1;
                return PageOutcome::FetchFailed;
            }
        };

        tracing::info!("Visited ({}): {}", self.frontier.visited_count(), url);

        let page = extract_page(&body);

        match self.dedup.evaluate(&page.text) {
            Verdict::TooShort { length } => {
                tracing::debug!(
                    "Skipping {}: {} characters of text (minimum {})",
                    url,
                    length,
                    self.dedup.min_length()
                );
                self.stats.too_short += 1;
                return PageOutcome::TooShort;
            }
            Verdict::Duplicate(fingerprint) => {
                tracing::debug!("Skipping {}: duplicate content {}", url, fingerprint);
                self.stats.duplicates += 1;
                return PageOutcome::Duplicate;
            }
            Verdict::Accepted(fingerprint) => {
                tracing::trace!("Accepted {} with fingerprint {}", url, fingerprint);
            }
        }

        let links = classify_links(&url, page.hrefs.iter().map(String::as_str), &self.scope);

        for link in &links.internal {
            if self.frontier.enqueue(link.clone()) {
                self.stats.links_enqueued += 1;
                tracing::trace!("Enqueued {}", link);
            }
        }

        self.records.push(PageRecord::new(
            url,
            page.text,
            links.internal,
            links.external,
        ));
        self.stats.records_accepted += 1;

        PageOutcome::Accepted
    }

    fn budget_reached(&self) -> bool {
        self.max_pages
            .is_some_and(|max| self.frontier.visited_count() >= max)
    }
}
