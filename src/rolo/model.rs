use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact entry in the notebook.
///
/// All text fields are free-form and may be empty; only the birth date is
/// typed. Records carry no identity of their own. A record is addressed by
/// its 1-based position in the most recent listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub note: String,
}

impl Record {
    pub fn new(
        full_name: impl Into<String>,
        birth_date: NaiveDate,
        phone: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date,
            phone: phone.into(),
            note: note.into(),
        }
    }
}

impl fmt::Display for Record {
    /// The canonical listing form: `full_name, YYYY-MM-DD, phone, note`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.full_name,
            self.birth_date.format("%Y-%m-%d"),
            self.phone,
            self.note
        )
    }
}
