use crate::commands::{CmdMessage, CmdResult};
use crate::notebook::Notebook;
use crate::store::SnapshotStore;

/// Persist the current notebook, degrading a failed save to a warning.
///
/// The in-memory state keeps the mutation either way; the user is told the
/// snapshot on disk is stale and the session carries on.
pub(crate) fn persist<S: SnapshotStore>(book: &Notebook, store: &mut S, result: &mut CmdResult) {
    if let Err(e) = store.save(book.all()) {
        log::warn!("saving the notebook failed: {e}");
        result.add_message(CmdMessage::warning(format!(
            "Could not save the notebook: {e}"
        )));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::error::{Result, RoloError};
    use crate::model::Record;
    use crate::store::SnapshotStore;
    use std::io;

    /// A store whose saves always fail, for exercising degrade paths.
    pub(crate) struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn load(&self) -> Result<Vec<Record>> {
            Ok(Vec::new())
        }

        fn save(&mut self, _records: &[Record]) -> Result<()> {
            Err(RoloError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FailingStore;
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::ivan;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn persist_saves_the_full_sequence() {
        let book = Notebook::from_records(vec![ivan()]);
        let mut store = InMemoryStore::new();
        let mut result = CmdResult::default();

        persist(&book, &mut store, &mut result);

        assert!(result.messages.is_empty());
        assert_eq!(store.load().unwrap(), vec![ivan()]);
    }

    #[test]
    fn persist_degrades_a_failed_save_to_a_warning() {
        let book = Notebook::from_records(vec![ivan()]);
        let mut store = FailingStore;
        let mut result = CmdResult::default();

        persist(&book, &mut store, &mut result);

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("Could not save"));
        // The in-memory sequence is unaffected by the failure.
        assert_eq!(book.len(), 1);
    }
}
