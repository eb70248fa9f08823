//! # Order Journal
//!
//! Placed orders are appended to a flat file, one JSON object per line.
//! The file as a whole is not a JSON document.

use crate::error::PizzeriaResult;
use crate::order::OrderRecord;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default journal file, relative to the working directory
pub const DEFAULT_JOURNAL_PATH: &str = "orders.json";

/// Append-only log of placed orders
#[derive(Debug, Clone)]
pub struct OrderJournal {
    path: PathBuf,
}

impl OrderJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    ///
    /// The file is opened, written and closed within this call.
    pub fn append(&self, record: &OrderRecord) -> PizzeriaResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;

        tracing::debug!(path = %self.path.display(), bytes = line.len(), "order appended");
        Ok(())
    }

    /// Read back every record. A missing file is an empty journal.
    pub fn read_all(&self) -> PizzeriaResult<Vec<OrderRecord>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

impl Default for OrderJournal {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;
    use crate::pizza::Pizza;

    fn record(name: &str, base: f64, toppings: &[&str]) -> OrderRecord {
        let mut pizza = Pizza::standard(name, Price::new(base));
        for t in toppings {
            pizza.add_topping(*t);
        }
        OrderRecord::from(&pizza)
    }

    #[test]
    fn test_append_writes_one_line_per_order() {
        let dir = tempfile::tempdir().unwrap();
        let journal = OrderJournal::new(dir.path().join("orders.json"));

        journal.append(&record("Маргарита", 7.99, &["чили"])).unwrap();
        journal.append(&record("Пепперони", 8.99, &[])).unwrap();
        journal.append(&record("Гавайская", 11.99, &["оливки", "прошутто"])).unwrap();

        let content = std::fs::read_to_string(journal.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(content.ends_with('\n'));

        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let obj = value.as_object().unwrap();
            assert_eq!(obj.len(), 4);
            assert!(obj["name"].is_string());
            assert!(obj["base_price"].is_number());
            assert!(obj["toppings"].is_array());
            assert!(obj["price"].is_number());
        }
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let journal = OrderJournal::new(dir.path().join("orders.json"));

        journal.append(&record("Маргарита", 7.99, &["чили"])).unwrap();

        let content = std::fs::read_to_string(journal.path()).unwrap();
        assert_eq!(
            content,
            "{\"name\":\"Маргарита\",\"base_price\":7.99,\"toppings\":[\"чили\"],\"price\":8.49}\n"
        );
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "{\"name\":\"old\",\"base_price\":1.0,\"toppings\":[],\"price\":1.0}\n").unwrap();

        let journal = OrderJournal::new(&path);
        journal.append(&record("new", 2.0, &[])).unwrap();

        let records = journal.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "old");
        assert_eq!(records[1].name, "new");
        assert_eq!(records[1].price, Price::new(2.0));
    }

    #[test]
    fn test_read_missing_journal() {
        let dir = tempfile::tempdir().unwrap();
        let journal = OrderJournal::new(dir.path().join("absent.json"));
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let journal = OrderJournal::new(dir.path().join("no-such-dir").join("orders.json"));
        assert!(journal.append(&record("x", 1.0, &[])).is_err());
    }
}
