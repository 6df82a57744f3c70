use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str())
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_remove_book() {
        let config = Configuration::new(Path::new("ignored.json"));
        let mut svc = factory::create_catalog_service(&config, RepositoryStore::Memory)
            .expect("should create catalog service");
        let book = svc.add_book("Мертвые души", "Николай Гоголь", 1842)
            .expect("should add book");

        let res = RemoveBookCommand::new(svc.as_mut())
            .execute(RemoveBookCommandRequest::new(book.book_id.to_string()))
            .expect("should remove book");
        assert_eq!(book.book_id, res.book.book_id);
        assert!(svc.list_books().is_empty());
    }

    #[test]
    fn test_should_report_unknown_book() {
        let config = Configuration::new(Path::new("ignored.json"));
        let mut svc = factory::create_catalog_service(&config, RepositoryStore::Memory)
            .expect("should create catalog service");

        let res = RemoveBookCommand::new(svc.as_mut())
            .execute(RemoveBookCommandRequest::new("deadbeef".to_string()));
        assert!(matches!(res, Err(CommandError::NotFound{ message: _ })));
    }
}
