//! Configuration handling for csvstore

use std::path::PathBuf;

/// File written by export when no destination is given
pub const DEFAULT_EXPORT_PATH: &str = "output.csv";

/// Output format used when showing a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Grid,
    Delimited,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(OutputFormat::Grid),
            "delimited" | "csv" => Ok(OutputFormat::Delimited),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// How a field's reported type tag follows the values appended to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypePolicy {
    /// The most recently appended value decides the tag
    #[default]
    LastToken,
    /// The first value decides the tag, later values widen it
    Widen,
}

/// Configuration for import, mutation and output
#[derive(Debug, Clone)]
pub struct Config {
    /// Field separator, a single ASCII byte
    pub delimiter: u8,
    /// Type tagging policy for fields
    pub type_policy: TypePolicy,
    /// Decimals shown for floats when displaying
    pub float_precision: usize,
    /// Format used by `show`
    pub output_format: OutputFormat,
    /// Export destination; `DEFAULT_EXPORT_PATH` when unset
    pub export_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b',',
            type_policy: TypePolicy::default(),
            float_precision: 2,
            output_format: OutputFormat::default(),
            export_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    ///
    /// Non-ASCII bytes are rejected with `StoreError::InvalidDelimiter` when a
    /// table is created.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the type tagging policy
    pub fn with_type_policy(mut self, policy: TypePolicy) -> Self {
        self.type_policy = policy;
        self
    }

    /// Set float display precision
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    /// Set output format for `show`
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set export destination
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// Resolved export destination
    pub fn export_destination(&self) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH))
    }
}
