//! Bordered grid output for terminals

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::Result;
use crate::model::Table;

use super::OutputFormatter;

/// Fixed-width bordered grid, header row first
pub struct GridOutput {
    precision: usize,
}

impl GridOutput {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for GridOutput {
    fn default() -> Self {
        Self::new(2)
    }
}

impl OutputFormatter for GridOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if table.field_count() == 0 {
            return Ok(());
        }

        let mut builder = Builder::default();
        builder.push_record(table.field_names().map(String::from));
        for row in table.rows() {
            builder.push_record(row.iter().map(|v| v.display(self.precision).into_owned()));
        }

        let mut grid = builder.build();
        grid.with(Style::sharp());
        writeln!(writer, "{}", grid)?;
        Ok(())
    }
}
