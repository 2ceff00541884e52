use crate::commands::{CmdMessage, CmdResult};
use crate::notebook::Notebook;
use crate::store::SnapshotStore;

/// Load the saved snapshot into a fresh notebook at session start.
///
/// A load failure is never fatal: the session starts empty and the user is
/// warned that the previous snapshot could not be read. There is no partial
/// recovery; a malformed file contributes zero records.
pub fn run<S: SnapshotStore>(store: &S) -> (Notebook, CmdResult) {
    let mut result = CmdResult::default();
    let book = match store.load() {
        Ok(records) => {
            log::debug!("loaded {} records", records.len());
            Notebook::from_records(records)
        }
        Err(e) => {
            log::warn!("loading the notebook failed: {e}");
            result.add_message(CmdMessage::warning(format!(
                "Could not read the data file: {e}. Starting with an empty notebook."
            )));
            Notebook::new()
        }
    };
    (book, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::seeded_store;
    use tempfile::TempDir;

    #[test]
    fn open_loads_the_saved_snapshot() {
        let store = seeded_store();

        let (book, result) = run(&store);

        assert_eq!(book.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn open_degrades_a_corrupt_snapshot_to_an_empty_notebook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notebook.json");
        std::fs::write(&path, "{{ definitely not json").unwrap();
        let store = FileStore::new(path);

        let (book, result) = run(&store);

        assert!(book.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("Could not read"));
    }

    #[test]
    fn open_treats_a_missing_file_as_empty_without_warning() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("notebook.json"));

        let (book, result) = run(&store);

        assert!(book.is_empty());
        assert!(result.messages.is_empty());
    }
}
