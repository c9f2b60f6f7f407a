use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default politeness delay after each accepted page, in seconds
pub const DEFAULT_DELAY_SECONDS: f64 = 1.0;

/// Default per-request timeout, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Pages with fewer visible characters than this are never recorded
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;

/// Main configuration structure for Site-Sieve
///
/// Every section and key is optional in the TOML file; command-line flags are
/// layered on top after loading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Delay after each accepted page (seconds)
    #[serde(rename = "delay-seconds", default = "default_delay_seconds")]
    pub delay_seconds: f64,

    /// Visited-page budget; unset or 0 means unbounded
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<usize>,

    /// Timeout for a single GET (seconds)
    #[serde(
        rename = "request-timeout-seconds",
        default = "default_request_timeout_seconds"
    )]
    pub request_timeout_seconds: u64,

    /// Minimum normalized text length (characters) for a page to be recorded
    #[serde(rename = "min-text-length", default = "default_min_text_length")]
    pub min_text_length: usize,
}

impl CrawlerConfig {
    /// The politeness delay; values validation would reject fall back to none
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds).unwrap_or(Duration::ZERO)
    }

    /// The effective page budget, with 0 treated as unbounded
    pub fn page_budget(&self) -> Option<usize> {
        self.max_pages.filter(|&max| max > 0)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_seconds: DEFAULT_DELAY_SECONDS,
            max_pages: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `Mozilla/5.0 (compatible; Name/Version)`
    pub fn header_value(&self) -> String {
        format!(
            "Mozilla/5.0 (compatible; {}/{})",
            self.crawler_name, self.crawler_version
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV result table
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_delay_seconds() -> f64 {
    DEFAULT_DELAY_SECONDS
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_min_text_length() -> usize {
    DEFAULT_MIN_TEXT_LENGTH
}

fn default_crawler_name() -> String {
    "CSVCrawler".to_string()
}

fn default_crawler_version() -> String {
    "1.0".to_string()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("output.csv")
}
