//! Delimited text importer

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ByteRecord;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::model::Table;
use crate::text;

/// Reads a header record and data records into a [`Table`]
#[derive(Debug, Clone)]
pub struct DelimitedParser {
    config: Config,
}

impl DelimitedParser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Import a file
    pub fn parse(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|source| StoreError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = self.parse_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            fields = table.field_count(),
            rows = table.row_count(),
            "imported table"
        );
        Ok(table)
    }

    /// Import from any reader.
    ///
    /// The first record names the fields. Data records whose token count differs
    /// from the field count, or that are not valid UTF-8, are skipped; blank lines
    /// are ignored.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.config.delimiter)
            .from_reader(reader);

        let mut records = csv_reader.byte_records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Table::new(Vec::<String>::new(), &self.config),
        };
        let names = header
            .iter()
            .map(|name| text::trim(&String::from_utf8_lossy(name)));
        let mut table = Table::new(names, &self.config)?;

        let mut skipped = 0usize;
        for result in records {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let tokens = match decode_record(&record) {
                Some(tokens) => tokens,
                None => {
                    skipped += 1;
                    debug!(line, "skipping record that is not valid UTF-8");
                    continue;
                }
            };
            if tokens.len() != table.field_count() {
                skipped += 1;
                debug!(
                    line,
                    expected = table.field_count(),
                    found = tokens.len(),
                    "skipping malformed record"
                );
                continue;
            }
            table.append_tokens(tokens)?;
        }

        if skipped > 0 {
            info!(skipped, "skipped malformed records");
        }

        Ok(table)
    }
}

fn decode_record(record: &ByteRecord) -> Option<Vec<&str>> {
    record
        .iter()
        .map(std::str::from_utf8)
        .collect::<std::result::Result<_, _>>()
        .ok()
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
