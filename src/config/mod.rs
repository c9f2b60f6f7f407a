//! Configuration module for Site-Sieve
//!
//! This module handles loading, parsing, and validating the optional TOML
//! settings file and layering command-line overrides on top of it.
//!
//! # Example
//!
//! ```no_run
//! use site_sieve::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sieve.toml")).unwrap();
//! println!("Crawler will stop after {:?} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_DELAY_SECONDS,
    DEFAULT_MIN_TEXT_LENGTH, DEFAULT_REQUEST_TIMEOUT_SECONDS,
};

// Re-export parser functions
pub use parser::{load_config, parse_config, resolve_config, ConfigOverrides};
pub use validation::validate;
