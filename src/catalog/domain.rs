pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub(crate) trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, id: &str) -> LibraryResult<BookDto>;
    fn update_book_status(&mut self, id: &str, new_status: &str) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: &str) -> Option<BookDto>;
    fn search_books(&self, search_term: &str) -> Vec<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
}
