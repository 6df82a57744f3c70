use crate::books::domain::{matches_search_term, Book};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub book_status: BookStatus,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn matches(&self, search_term: &str) -> bool {
        matches_search_term(self.title.as_str(), self.author.as_str(), self.year, search_term)
    }
}
