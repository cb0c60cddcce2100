//! Rendering tables as delimited text, a grid or JSON

mod delimited;
mod grid;
mod json;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::model::Table;

pub use delimited::DelimitedOutput;
pub use grid::GridOutput;
pub use json::JsonOutput;

/// Trait for table renderers
pub trait OutputFormatter {
    /// Render the whole table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create a formatter for the given format
    pub fn create(format: OutputFormat, config: &Config) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Grid => Box::new(GridOutput::new(config.float_precision)),
            OutputFormat::Delimited => Box::new(DelimitedOutput::new(config.delimiter)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Write the table as delimited text to the configured export path.
///
/// Uses the table's own delimiter and returns the path written.
pub fn export(table: &Table, config: &Config) -> Result<PathBuf> {
    let path = config.export_destination();
    let mut writer = BufWriter::new(File::create(&path)?);
    DelimitedOutput::new(table.delimiter()).render(table, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), rows = table.row_count(), "exported table");
    Ok(path)
}

/// Render the table to stdout in the configured format
pub fn show(table: &Table, config: &Config) -> Result<()> {
    let formatter = OutputFactory::create(config.output_format, config);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    formatter.render(table, &mut handle)?;
    handle.flush()?;
    Ok(())
}
