use super::SnapshotStore;
use crate::error::{Result, RoloError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed snapshot store.
///
/// Keeps the whole notebook in one pretty-printed JSON file so the snapshot
/// stays inspectable with a plain text editor.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("notebook.json"))
    }

    fn sample() -> Record {
        Record::new(
            "Ivan Petrov",
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            "12345",
            "friend",
        )
    }

    #[test]
    fn save_then_load_roundtrips_all_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(&[sample()]).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, vec![sample()]);
    }

    #[test]
    fn load_missing_file_yields_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "this is not json {").unwrap();

        assert!(matches!(store.load(), Err(RoloError::Serialization(_))));
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join(".rolo").join("notebook.json"));

        store.save(&[sample()]).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_overwrites_the_whole_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(&[sample(), sample()]).unwrap();
        store.save(&[]).unwrap();

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn snapshot_is_human_inspectable_json() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(&[sample()]).unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();

        assert!(on_disk.contains("\"full_name\": \"Ivan Petrov\""));
        assert!(on_disk.contains("\"birth_date\": \"1990-05-01\""));
    }
}
