//! Site-Sieve main entry point
//!
//! This is the command-line interface for the Site-Sieve crawler.

use anyhow::Context;
use clap::Parser;
use site_sieve::config::{resolve_config, ConfigOverrides};
use site_sieve::crawler::crawl;
use site_sieve::output::{print_statistics, write_csv};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Sieve: crawl a website and output a CSV of page data
///
/// Walks one host breadth-first from the seed URL, extracts the visible text
/// and links of every page, skips near-empty and duplicate pages, and writes
/// one CSV row per distinct page.
#[derive(Parser, Debug)]
#[command(name = "site-sieve")]
#[command(version)]
#[command(about = "Crawl a website and output a CSV of page data", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(long, value_name = "URL")]
    url: String,

    /// Delay after each recorded page, in seconds [default: 1.0]
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Maximum number of pages to visit
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Path to save the CSV file [default: output.csv]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Optional TOML settings file; flags override its values
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(
        cli.config.as_deref(),
        ConfigOverrides {
            delay_seconds: cli.delay,
            max_pages: cli.max_pages,
            output: cli.output,
        },
    )
    .context("Failed to load configuration")?;

    let report = crawl(&cli.url, &config)
        .await
        .with_context(|| format!("Failed to start crawl at {}", cli.url))?;

    let output_path = &config.output.csv_path;
    write_csv(output_path, &report.records)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if !cli.quiet {
        print_statistics(&report.statistics);
    }

    tracing::info!(
        "Crawl finished. Data saved to {}",
        output_path.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so they never mix with piped output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_sieve=info,warn"),
            1 => EnvFilter::new("site_sieve=debug,info"),
            2 => EnvFilter::new("site_sieve=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
