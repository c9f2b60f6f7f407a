//! CSV output handler
//!
//! Writes one row per record with the columns
//! `URL`, `Page Text`, `Internal Links`, `External Links`.

use crate::output::traits::{OutputHandler, OutputResult, PageRecord};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers, in order
pub const CSV_HEADERS: [&str; 4] = ["URL", "Page Text", "Internal Links", "External Links"];

/// CSV-based output handler
///
/// The header row is written on construction, so an empty crawl still
/// produces a well-formed table.
pub struct CsvOutput<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvOutput<File> {
    /// Creates (or truncates) the CSV file at `path`
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvOutput<W> {
    /// Wraps any writer and emits the header row
    pub fn new(inner: W) -> OutputResult<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(CSV_HEADERS)?;
        Ok(Self { writer })
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> OutputHandler for CsvOutput<W> {
    fn write_record(&mut self, record: &PageRecord) -> OutputResult<()> {
        let internal = record.internal_links_joined();
        let external = record.external_links_joined();
        self.writer.write_record([
            record.url().as_str(),
            record.text(),
            internal.as_str(),
            external.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
