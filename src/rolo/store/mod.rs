//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The
//! [`SnapshotStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Snapshot Semantics
//!
//! The notebook is always persisted as a whole: `save` overwrites the file
//! with the full record sequence, and `load` reads it back in one piece.
//! There is no partial recovery. If the stored snapshot cannot be
//! deserialized, the whole load fails and the session starts empty.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Full snapshot in one pretty-printed JSON file (`notebook.json`)
//!   - A missing file reads as an empty notebook, not an error
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Holds the last saved snapshot, no persistence

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for notebook persistence.
pub trait SnapshotStore {
    /// Load the saved snapshot. An absent snapshot is an empty notebook.
    fn load(&self) -> Result<Vec<Record>>;

    /// Persist the full record sequence, replacing any previous snapshot.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
