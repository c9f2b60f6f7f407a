//! Output module for writing crawl results and reports
//!
//! This module handles:
//! - The record type produced for each accepted page
//! - Writing records to a CSV table
//! - Recording and printing crawl statistics

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{CsvOutput, CSV_HEADERS};
pub use stats::{print_statistics, render_statistics, CrawlStatistics, TerminationReason};
pub use traits::{OutputError, OutputHandler, OutputResult, PageRecord, LINK_SEPARATOR};

use std::path::Path;

/// Writes all records to a CSV file at `path`
///
/// The file is created or truncated. The header row is written even when
/// `records` is empty.
///
/// # Returns
///
/// * `Ok(())` - Successfully written
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_csv(path: &Path, records: &[PageRecord]) -> OutputResult<()> {
    let mut output = CsvOutput::create(path)?;
    output.write_all(records)?;
    tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use url::Url;

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let record = PageRecord::new(
            Url::parse("http://a.test/").unwrap(),
            "Some text".to_string(),
            BTreeSet::new(),
            BTreeSet::new(),
        );

        write_csv(&path, &[record]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "URL,Page Text,Internal Links,External Links\nhttp://a.test/,Some text,,\n"
        );
    }

    #[test]
    fn test_write_csv_bad_directory() {
        let result = write_csv(Path::new("/nonexistent/dir/output.csv"), &[]);
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
