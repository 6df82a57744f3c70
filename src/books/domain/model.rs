use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::books::domain::{matches_search_term, Book};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity abstracts one physical book record in the catalog. The serialized
// shape is the data-file contract: keys id, title, author, year, status.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(rename = "id")]
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(rename = "status")]
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        // 4 random bytes rendered as 8 lowercase hex chars; the id space is
        // narrow enough that stored files may collide with fresh ids
        Self {
            book_id: format!("{:08x}", rand::thread_rng().gen::<u32>()),
            title: title.to_string(),
            author: author.to_string(),
            year,
            book_status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn matches(&self, search_term: &str) -> bool {
        matches_search_term(self.title.as_str(), self.author.as_str(), self.year, search_term)
    }
}
