use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::Record;

/// The address book: records keyed by exact contact name, kept in
/// insertion order. Lookups are linear scans; the book never holds two
/// records with the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a record. A record with the same name is replaced in
    /// place (last write wins, original position kept); otherwise the
    /// record is appended.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let i = self.position(name)?;
        Some(&mut self.records[i])
    }

    /// Removes the record with the given name, preserving the order of
    /// the rest.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let i = self.position(name)?;
        Some(self.records.remove(i))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Batched iteration: up to `page_size` records per batch, in
    /// insertion order, last batch possibly shorter. The record list is
    /// snapshotted when the iterator is created, so mutating the book
    /// mid-iteration does not affect it. A page size of 0 is treated
    /// as 1.
    pub fn pages(&self, page_size: usize) -> Pages {
        Pages {
            records: self.records.clone(),
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Snapshot iterator over batches of records. See [`AddressBook::pages`].
pub struct Pages {
    records: Vec<Record>,
    page_size: usize,
    cursor: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }
        let end = (self.cursor + self.page_size).min(self.records.len());
        let batch = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(batch)
    }
}
