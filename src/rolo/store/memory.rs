use super::SnapshotStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Holds the last saved snapshot; does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a snapshot, as if a previous session saved it.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self { snapshot: records }
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.snapshot = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
    }

    pub fn ivan() -> Record {
        Record::new("Ivan Petrov", date(1990, 5, 1), "12345", "friend")
    }

    pub fn anna() -> Record {
        Record::new("Anna", date(1985, 3, 14), "+7 900 111-22-33", "sister")
    }

    pub fn boris() -> Record {
        Record::new("Boris", date(1992, 11, 30), "+7 900 444-55-66", "colleague")
    }

    /// A store whose snapshot already contains Anna and Boris, in that order.
    pub fn seeded_store() -> InMemoryStore {
        InMemoryStore::with_records(vec![anna(), boris()])
    }
}
