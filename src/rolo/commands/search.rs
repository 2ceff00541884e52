use crate::commands::{CmdMessage, CmdResult};
use crate::notebook::{Notebook, SearchKey};

pub fn run(book: &Notebook, key: &SearchKey) -> CmdResult {
    let matches = book.search(key);

    let mut result = CmdResult::default().with_listed(matches);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::{anna, boris, date};
    use crate::model::Record;

    #[test]
    fn matching_records_come_back_in_original_order() {
        let annette = Record::new("Annette", date(1970, 7, 7), "", "");
        let book = Notebook::from_records(vec![boris(), annette.clone(), anna()]);

        let result = run(&book, &SearchKey::Name("ANN".into()));

        let names: Vec<_> = result.listed.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, ["Annette", "Anna"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_matches_is_an_info_message_not_an_error() {
        let book = Notebook::from_records(vec![anna()]);

        let result = run(&book, &SearchKey::Phone("000".into()));

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "No records found.");
    }

    #[test]
    fn date_search_uses_exact_equality() {
        let book = Notebook::from_records(vec![anna(), boris()]);

        let result = run(&book, &SearchKey::BirthDate(date(1985, 3, 14)));

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].full_name, "Anna");
    }
}
