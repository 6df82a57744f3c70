use std::path::Path;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(store: RepositoryStore, data_file: &Path) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonBookRepository::new(data_file))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
