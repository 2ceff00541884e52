use crate::commands::CmdResult;
use crate::notebook::Notebook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Insertion order, as stored.
    AsIs,
    /// Sorted by full name, ascending; the store itself is not reordered.
    ByName,
}

pub fn run(book: &Notebook, order: ListOrder) -> CmdResult {
    let listed = match order {
        ListOrder::AsIs => book.all().to_vec(),
        ListOrder::ByName => book.sorted_by_name(),
    };
    CmdResult::default().with_listed(listed)
}
