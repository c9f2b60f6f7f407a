//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the identifying user agent and timeout
//! - GET requests to fetch page content
//! - Classifying failures into explicit outcome variants
//!
//! Failures are values, not errors: the crawl loop consumes a
//! [`FetchOutcome`] and never unwinds on a bad page.

use crate::config::UserAgentConfig;
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Maximum redirect hops followed for a single GET
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Successfully fetched the page with a 2xx status
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The page could not be fetched; never retried
    Failure(FetchFailure),
}

impl FetchOutcome {
    /// Builds a failure outcome
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(FetchFailure {
            kind,
            message: message.into(),
        })
    }
}

/// Why a fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request exceeded the configured timeout
    Timeout,
    /// Connection refused, DNS failure, TLS failure
    Connect,
    /// The server answered with a non-2xx status
    HttpStatus(u16),
    /// Too many redirects or a redirect loop
    Redirect,
    /// The response body could not be read as text
    Body,
    /// Anything else reported by the HTTP client
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout"),
            Self::Connect => f.write_str("connection error"),
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            Self::Redirect => f.write_str("redirect error"),
            Self::Body => f.write_str("unreadable body"),
            Self::Other => f.write_str("request error"),
        }
    }
}

/// Details of a failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Capability to perform a single GET
///
/// The crawl loop is generic over this trait so it can run against the real
/// HTTP client or an in-memory site.
pub trait Fetcher {
    /// Fetches `url`, resolving to an explicit success or failure
    fn fetch(&self, url: &Url) -> impl Future<Output = FetchOutcome> + Send;
}

/// [`Fetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the given identity and per-request timeout
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, timeout)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchOutcome {
        fetch_url(&self.client, url.as_str()).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Upper bound for a whole request, body included
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use site_sieve::config::UserAgentConfig;
/// use site_sieve::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx with readable body | `Success` |
/// | Non-2xx status | `Failure(HttpStatus)` |
/// | Timeout | `Failure(Timeout)` |
/// | Connection refused, DNS, TLS | `Failure(Connect)` |
/// | Redirect chain > 10 or loop | `Failure(Redirect)` |
/// | Body not decodable | `Failure(Body)` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(&e),
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchOutcome::failure(
            FailureKind::HttpStatus(status.as_u16()),
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        );
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) if e.is_timeout() => FetchOutcome::failure(FailureKind::Timeout, e.to_string()),
        Err(e) => FetchOutcome::failure(FailureKind::Body, e.to_string()),
    }
}

fn classify_error(error: &reqwest::Error) -> FetchOutcome {
    let kind = if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_redirect() {
        FailureKind::Redirect
    } else {
        FailureKind::Other
    };
    FetchOutcome::failure(kind, error.to_string())
}
