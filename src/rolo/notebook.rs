use crate::error::{Result, RoloError};
use crate::model::Record;
use chrono::NaiveDate;

/// A search query against one record field.
///
/// Text keys match by case-insensitive substring containment; the date key
/// matches by exact calendar-date equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    Name(String),
    Phone(String),
    Note(String),
    BirthDate(NaiveDate),
}

/// The in-memory record store for the session.
///
/// Owns the ordered sequence of records; insertion order is preserved except
/// where a caller explicitly asks for a sorted view. Every query returns a
/// fresh snapshot and leaves the underlying sequence untouched.
#[derive(Debug, Default)]
pub struct Notebook {
    records: Vec<Record>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Appends a record to the end of the sequence.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the record at a 1-based position and returns it.
    ///
    /// Positions refer to the current sequence, i.e. the numbering of the
    /// most recent listing.
    pub fn remove_at(&mut self, position: usize) -> Result<Record> {
        if position == 0 || position > self.records.len() {
            return Err(RoloError::PositionNotFound(position));
        }
        Ok(self.records.remove(position - 1))
    }

    /// The current sequence in unmodified order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A new sequence sorted by full name, ascending.
    ///
    /// The sort is stable: records with equal names keep their relative
    /// insertion order. The store itself is not reordered.
    pub fn sorted_by_name(&self) -> Vec<Record> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        sorted
    }

    /// Linear scan for records matching the key, in original order.
    pub fn search(&self, key: &SearchKey) -> Vec<Record> {
        match key {
            SearchKey::Name(query) => self.matching_text(query, |r| &r.full_name),
            SearchKey::Phone(query) => self.matching_text(query, |r| &r.phone),
            SearchKey::Note(query) => self.matching_text(query, |r| &r.note),
            SearchKey::BirthDate(date) => self
                .records
                .iter()
                .filter(|r| r.birth_date == *date)
                .cloned()
                .collect(),
        }
    }

    fn matching_text<F>(&self, query: &str, field: F) -> Vec<Record>
    where
        F: Fn(&Record) -> &str,
    {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| field(r).to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }
}
