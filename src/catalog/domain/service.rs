use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    // Loads the persisted catalog up front; a broken data file fails
    // construction instead of silently starting over an empty catalog.
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let books = book_repository.load_all()?;
        info!("catalog opened with {} books from {}", books.len(), book_repository.describe());
        Ok(Self {
            books,
            book_repository,
        })
    }

    fn position_by_id(&self, id: &str) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(
                format!("Book with ID {} not found", id).as_str()))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookDto> {
        if title.trim().is_empty() {
            return Err(LibraryError::validation(
                "Title must not be empty", Some("empty_title".to_string())));
        }
        if author.trim().is_empty() {
            return Err(LibraryError::validation(
                "Author must not be empty", Some("empty_author".to_string())));
        }
        // duplicates compare title, author and year exactly, case included
        if self.books.iter().any(|b| b.title == title && b.author == author && b.year == year) {
            return Err(LibraryError::duplicate_key(
                format!("A book with this title, author and year already exists: {}, {}, {}",
                        title, author, year).as_str()));
        }
        let book = BookEntity::new(title, author, year);
        let dto = BookDto::from(&book);
        self.books.push(book);
        self.book_repository.save_all(self.books.as_slice())?;
        info!("book added: {} ({})", dto.title, dto.book_id);
        Ok(dto)
    }

    fn remove_book(&mut self, id: &str) -> LibraryResult<BookDto> {
        let index = self.position_by_id(id)?;
        let removed = self.books.remove(index);
        self.book_repository.save_all(self.books.as_slice())?;
        info!("book removed: {} ({})", removed.title, removed.book_id);
        Ok(BookDto::from(&removed))
    }

    fn update_book_status(&mut self, id: &str, new_status: &str) -> LibraryResult<BookDto> {
        // id lookup comes first, so an unknown id reports NotFound even when
        // the status string is also invalid
        let index = self.position_by_id(id)?;
        let status = new_status.parse::<BookStatus>()?;
        self.books[index].book_status = status;
        self.book_repository.save_all(self.books.as_slice())?;
        let book = &self.books[index];
        info!("book status updated: {} -> {}", book.id(), book.status());
        Ok(BookDto::from(book))
    }

    fn find_book_by_id(&self, id: &str) -> Option<BookDto> {
        self.books.iter().find(|b| b.id() == id).map(BookDto::from)
    }

    fn search_books(&self, search_term: &str) -> Vec<BookDto> {
        self.books.iter().filter(|b| b.matches(search_term)).map(BookDto::from).collect()
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            book_status: other.book_status,
        }
    }
}
