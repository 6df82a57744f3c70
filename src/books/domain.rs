use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn status(&self) -> BookStatus;
    fn matches(&self, search_term: &str) -> bool;
}

// Search matching: the lowercased term against lowercased title or author,
// or the term exactly as typed against the decimal digits of the year.
pub(crate) fn matches_search_term(title: &str, author: &str, year: i32, search_term: &str) -> bool {
    let needle = search_term.to_lowercase();
    title.to_lowercase().contains(needle.as_str())
        || author.to_lowercase().contains(needle.as_str())
        || year.to_string().contains(search_term)
}
