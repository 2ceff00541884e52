use crate::commands::{CmdMessage, CmdResult};
use crate::notebook::Notebook;
use crate::store::SnapshotStore;

use super::helpers::persist;

/// Remove the record at a 1-based position from the most recent listing.
///
/// The shell's range prompt already constrains the position to the current
/// count; an out-of-range position here still answers with an error message
/// rather than touching the sequence.
pub fn run<S: SnapshotStore>(book: &mut Notebook, store: &mut S, position: usize) -> CmdResult {
    let mut result = CmdResult::default();
    match book.remove_at(position) {
        Ok(removed) => {
            result.add_message(CmdMessage::success(format!(
                "Record removed: {}",
                removed.full_name
            )));
            persist(book, store, &mut result);
        }
        Err(e) => result.add_message(CmdMessage::error(e.to_string())),
    }
    result
}
