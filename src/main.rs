//! csvstore - In-memory typed columnar store for delimited text

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use csvstore::config::{Config, OutputFormat, TypePolicy, DEFAULT_EXPORT_PATH};
use csvstore::{export, import, show};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Grid,
    Delimited,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Grid => OutputFormat::Grid,
            CliOutputFormat::Delimited => OutputFormat::Delimited,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTypePolicy {
    LastToken,
    Widen,
}

impl From<CliTypePolicy> for TypePolicy {
    fn from(p: CliTypePolicy) -> Self {
        match p {
            CliTypePolicy::LastToken => TypePolicy::LastToken,
            CliTypePolicy::Widen => TypePolicy::Widen,
        }
    }
}

/// Import a delimited file, edit its rows, and export or print it
#[derive(Parser, Debug)]
#[command(name = "csvstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Delimited file to import
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Append a row of delimited data (repeatable)
    #[arg(short, long = "add", value_name = "ROW", allow_hyphen_values = true)]
    add: Vec<String>,

    /// Remove the row at a 0-based index (repeatable, applied after adds)
    #[arg(short, long = "remove", value_name = "INDEX", allow_hyphen_values = true)]
    remove: Vec<String>,

    /// Export the table as delimited text
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_PATH
    )]
    output: Option<PathBuf>,

    /// Print the table to stdout
    #[arg(short, long)]
    print: bool,

    /// Format used by --print
    #[arg(short, long, value_enum, default_value = "grid")]
    format: CliOutputFormat,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// How a field's type tag follows appended values
    #[arg(long, value_enum, default_value = "last-token")]
    type_policy: CliTypePolicy,

    /// Decimals shown for floats when printing
    #[arg(long, default_value_t = 2)]
    precision: usize,
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }

    let mut config = Config::new()
        .with_delimiter(cli.delimiter as u8)
        .with_type_policy(cli.type_policy.into())
        .with_float_precision(cli.precision)
        .with_output_format(cli.format.into());

    let mut table = import(&cli.input, &config)
        .with_context(|| format!("Failed to import {}", cli.input.display()))?;

    for row in &cli.add {
        if !table.add_row(row)? {
            warn!(
                row = %row,
                fields = table.field_count(),
                "row is malformed or does not match the field count, ignored"
            );
        }
    }

    for arg in &cli.remove {
        match arg.parse::<usize>() {
            Ok(index) if index < table.row_count() => {
                table.remove_row(index)?;
            }
            _ => eprintln!("Error: Invalid argument {} for option -r.", arg),
        }
    }

    if let Some(path) = cli.output {
        config = config.with_export_path(path);
        let written = export(&table, &config).with_context(|| {
            format!(
                "Failed to export to {}",
                config.export_destination().display()
            )
        })?;
        info!(path = %written.display(), "exported table");
    }

    if cli.print {
        show(&table, &config).context("Failed to print table")?;
    }

    table.clear();
    Ok(())
}
