//! Row-level mutation that keeps every field the same length

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::text;

use super::table::Table;
use super::value::Value;

impl Table {
    /// Append one delimited row.
    ///
    /// Returns `Ok(false)` without touching the table when the row's token count
    /// differs from the field count, or when the line holds more than one record.
    pub fn add_row(&mut self, raw_line: &str) -> Result<bool> {
        if text::has_embedded_line_break(raw_line) {
            debug!("rejecting row with an embedded line break");
            return Ok(false);
        }

        let expected = self.field_count();
        let found = text::count_tokens(raw_line, self.delimiter);
        if found != expected {
            debug!(expected, found, "rejecting row with wrong token count");
            return Ok(false);
        }

        let tokens = text::split_tokens(raw_line, self.delimiter);
        self.append_tokens(&tokens)?;
        Ok(true)
    }

    /// Remove the row at `index` from every field and return its values.
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<Value>> {
        if index >= self.items {
            return Err(StoreError::RowOutOfRange {
                index,
                items: self.items,
            });
        }

        let removed: Vec<Value> = self
            .fields
            .values_mut()
            .map(|field| field.remove(index))
            .collect();
        self.items -= 1;

        debug_assert!(self.is_aligned());
        Ok(removed)
    }

    /// Classify and append one token per field.
    ///
    /// The caller guarantees the token count matches the field count. Capacity is
    /// reserved in every field before any value is pushed.
    pub(crate) fn append_tokens<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for field in self.fields.values_mut() {
            field.try_reserve(1)?;
        }

        let policy = self.type_policy;
        let mut pushed = 0;
        for (field, token) in self.fields.values_mut().zip(tokens) {
            field.push(text::classify(token.as_ref()), policy);
            pushed += 1;
        }
        debug_assert_eq!(pushed, self.fields.len());

        self.items += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, TypePolicy};
    use crate::error::StoreError;
    use crate::model::{Table, Value, ValueKind};

    fn people() -> Table {
        let mut table = Table::new(["name", "age"], &Config::default()).unwrap();
        assert!(table.add_row("Alice,30").unwrap());
        assert!(table.add_row("Bob,25").unwrap());
        table
    }

    #[test]
    fn test_add_row() {
        let mut table = people();
        assert!(table.add_row("Carol, 40").unwrap());
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.row(2).unwrap(),
            vec![&Value::from("Carol"), &Value::Integer(40)]
        );
        assert!(table.is_aligned());
    }

    #[test]
    fn test_add_row_rejects_wrong_token_count() {
        let mut table = people();
        assert!(!table.add_row("Carol").unwrap());
        assert!(!table.add_row("Carol,40,extra").unwrap());
        assert!(!table.add_row("").unwrap());
        assert_eq!(table.row_count(), 2);
        assert!(table.field("name").unwrap().values().len() == 2);
        assert!(table.is_aligned());
    }

    #[test]
    fn test_add_row_rejects_embedded_line_break() {
        let mut table = people();
        assert!(!table.add_row("Car\nol,40").unwrap());
        assert!(!table.add_row("Carol,4\r0").unwrap());
        assert_eq!(table.row_count(), 2);
        assert!(table.is_aligned());

        assert!(table.add_row("Carol,40\r\n").unwrap());
        assert_eq!(
            table.row(2).unwrap(),
            vec![&Value::from("Carol"), &Value::Integer(40)]
        );
    }

    #[test]
    fn test_add_row_retags_field() {
        let mut table = people();
        table.add_row("Dave,unknown").unwrap();
        assert_eq!(table.field("age").unwrap().kind(), ValueKind::Text);
        table.add_row("Erin,41.5").unwrap();
        assert_eq!(table.field("age").unwrap().kind(), ValueKind::Float);
    }

    #[test]
    fn test_add_row_widen_policy() {
        let config = Config::default().with_type_policy(TypePolicy::Widen);
        let mut table = Table::new(["n"], &config).unwrap();
        table.add_row("1").unwrap();
        table.add_row("2.5").unwrap();
        table.add_row("3").unwrap();
        assert_eq!(table.field("n").unwrap().kind(), ValueKind::Float);
    }

    #[test]
    fn test_add_row_custom_delimiter() {
        let config = Config::default().with_delimiter(b';');
        let mut table = Table::new(["a", "b"], &config).unwrap();
        assert!(table.add_row("x;1").unwrap());
        assert!(!table.add_row("x,1").unwrap());
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_remove_row_twice_from_front() {
        let mut table = people();
        table.add_row("Carol,40").unwrap();

        table.remove_row(0).unwrap();
        table.remove_row(0).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.row(0).unwrap(),
            vec![&Value::from("Carol"), &Value::Integer(40)]
        );
        assert!(table.is_aligned());
    }

    #[test]
    fn test_remove_row_returns_values() {
        let mut table = people();
        let removed = table.remove_row(1).unwrap();
        assert_eq!(removed, vec![Value::from("Bob"), Value::Integer(25)]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_remove_row_out_of_range() {
        let mut table = people();
        let err = table.remove_row(2).unwrap_err();
        assert!(matches!(err, StoreError::RowOutOfRange { index: 2, items: 2 }));
        assert_eq!(table.row_count(), 2);
        assert!(table.is_aligned());
    }

    #[test]
    fn test_alignment_after_mixed_mutations() {
        let mut table = people();
        let ops: &[(&str, Option<usize>)] = &[
            ("Carol,40", None),
            ("", Some(1)),
            ("Dave", None),
            ("Erin,22", None),
            ("", Some(0)),
        ];
        for (line, remove) in ops {
            match remove {
                Some(index) => {
                    table.remove_row(*index).unwrap();
                }
                None => {
                    table.add_row(line).unwrap();
                }
            }
            assert!(table.is_aligned());
            for field in table.fields() {
                assert_eq!(field.len(), table.metadata().items);
            }
        }
        assert_eq!(table.row_count(), 2);
    }
}
