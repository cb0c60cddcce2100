//! Importer for delimited text sources

mod delimited;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;

pub use self::delimited::DelimitedParser;

/// Import a delimited file into a table
pub fn import(path: impl AsRef<Path>, config: &Config) -> Result<Table> {
    DelimitedParser::new(config.clone()).parse(path.as_ref())
}
