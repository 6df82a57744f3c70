use std::cell::RefCell;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository is the in-process stand-in for the file store, with
// the same contract and no disk underneath.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RefCell<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RefCell::new(Vec::new()),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.borrow().clone())
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        *self.books.borrow_mut() = entities.to_vec();
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
