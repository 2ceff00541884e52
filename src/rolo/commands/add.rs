use crate::commands::{CmdMessage, CmdResult};
use crate::model::Record;
use crate::notebook::Notebook;
use crate::store::SnapshotStore;

use super::helpers::persist;

pub fn run<S: SnapshotStore>(book: &mut Notebook, store: &mut S, record: Record) -> CmdResult {
    book.add(record);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record added successfully!"));
    persist(book, store, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::FailingStore;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::{anna, ivan};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_appends_and_persists() {
        let mut book = Notebook::from_records(vec![anna()]);
        let mut store = InMemoryStore::new();

        let result = run(&mut book, &mut store, ivan());

        assert_eq!(book.len(), 2);
        assert_eq!(book.all().last().unwrap(), &ivan());
        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn add_keeps_the_record_in_memory_when_saving_fails() {
        let mut book = Notebook::new();
        let mut store = FailingStore;

        let result = run(&mut book, &mut store, ivan());

        assert_eq!(book.len(), 1);
        let levels: Vec<_> = result.messages.iter().map(|m| m.level).collect();
        assert_eq!(levels, [MessageLevel::Success, MessageLevel::Warning]);
    }
}
