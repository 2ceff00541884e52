//! # Session Facade
//!
//! [`Session`] is a thin facade over the command layer and the single entry
//! point for every notebook operation. It owns the [`Notebook`] and the
//! snapshot store for the process lifetime: constructed once at program
//! start and handed to the interactive loop, never reached through a global.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** ([`CmdResult`]) for the shell to render
//!
//! It does no business logic (that lives in `commands/*.rs`) and no I/O of
//! its own beyond what the store performs.
//!
//! `Session<S: SnapshotStore>` is generic over the storage backend:
//! production uses `Session<FileStore>`, tests use `Session<InMemoryStore>`.

use crate::commands::list::ListOrder;
use crate::commands::{self, CmdResult};
use crate::model::Record;
use crate::notebook::{Notebook, SearchKey};
use crate::store::SnapshotStore;

pub struct Session<S: SnapshotStore> {
    book: Notebook,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Open a session over the given store, loading the saved snapshot.
    ///
    /// The returned [`CmdResult`] carries the load warning when the snapshot
    /// could not be read; the session itself always comes up usable.
    pub fn open(store: S) -> (Self, CmdResult) {
        let (book, result) = commands::open::run(&store);
        (Self { book, store }, result)
    }

    pub fn add(&mut self, record: Record) -> CmdResult {
        commands::add::run(&mut self.book, &mut self.store, record)
    }

    pub fn remove_at(&mut self, position: usize) -> CmdResult {
        commands::remove::run(&mut self.book, &mut self.store, position)
    }

    pub fn list(&self, order: ListOrder) -> CmdResult {
        commands::list::run(&self.book, order)
    }

    pub fn search(&self, key: &SearchKey) -> CmdResult {
        commands::search::run(&self.book, key)
    }

    pub fn record_count(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}
