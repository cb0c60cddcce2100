//! Delimited text output, the inverse of import

use std::io::Write;

use crate::error::Result;
use crate::model::Table;

use super::OutputFormatter;

/// Header line followed by one line per row, each terminated by `\n`
pub struct DelimitedOutput {
    delimiter: u8,
}

impl DelimitedOutput {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimitedOutput {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl OutputFormatter for DelimitedOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let separator = char::from(self.delimiter).to_string();

        let header: Vec<_> = table.field_names().collect();
        writeln!(writer, "{}", header.join(&separator))?;

        for row in table.rows() {
            let cells: Vec<_> = row.iter().map(|v| v.to_field()).collect();
            writeln!(writer, "{}", cells.join(&separator))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn render(table: &Table, delimiter: u8) -> String {
        let mut out = Vec::new();
        DelimitedOutput::new(delimiter)
            .render(table, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_after_mutation() {
        let mut table = Table::new(["name", "age"], &Config::default()).unwrap();
        table.add_row("Alice,30").unwrap();
        table.add_row("Bob,25").unwrap();
        table.add_row("Carol,40").unwrap();
        table.remove_row(0).unwrap();

        assert_eq!(render(&table, b','), "name,age\nBob,25\nCarol,40\n");
    }

    #[test]
    fn test_render_floats_and_delimiter() {
        let config = Config::default().with_delimiter(b'|');
        let mut table = Table::new(["x", "y"], &config).unwrap();
        table.add_row("2.0|3.25").unwrap();

        assert_eq!(render(&table, b'|'), "x|y\n2.0|3.25\n");
    }

    #[test]
    fn test_render_header_only() {
        let table = Table::new(["a", "b"], &Config::default()).unwrap();
        assert_eq!(render(&table, b','), "a,b\n");
    }
}
