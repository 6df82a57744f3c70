use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookStatusCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookStatusCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// new_status stays a raw string here; the domain service decides whether it
// names a known status
#[derive(Debug)]
pub(crate) struct UpdateBookStatusCommandRequest {
    pub(crate) book_id: String,
    pub(crate) new_status: String,
}

impl UpdateBookStatusCommandRequest {
    pub fn new(book_id: String, new_status: String) -> Self {
        Self {
            book_id,
            new_status,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookStatusCommandResponse {
    pub book: BookDto,
}

impl UpdateBookStatusCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<UpdateBookStatusCommandRequest, UpdateBookStatusCommandResponse> for UpdateBookStatusCommand<'a> {
    fn execute(&mut self, req: UpdateBookStatusCommandRequest) -> Result<UpdateBookStatusCommandResponse, CommandError> {
        self.catalog_service.update_book_status(req.book_id.as_str(), req.new_status.as_str())
            .map_err(CommandError::from).map(UpdateBookStatusCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::catalog::command::update_status_cmd::{UpdateBookStatusCommand, UpdateBookStatusCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_update_book_status() {
        let config = Configuration::new(Path::new("ignored.json"));
        let mut svc = factory::create_catalog_service(&config, RepositoryStore::Memory)
            .expect("should create catalog service");
        let book = svc.add_book("Анна Каренина", "Лев Толстой", 1877)
            .expect("should add book");

        let res = UpdateBookStatusCommand::new(svc.as_mut())
            .execute(UpdateBookStatusCommandRequest::new(book.book_id.to_string(), "выдана".to_string()))
            .expect("should update status");
        assert_eq!(BookStatus::CheckedOut, res.book.book_status);
    }

    #[test]
    fn test_should_report_invalid_status() {
        let config = Configuration::new(Path::new("ignored.json"));
        let mut svc = factory::create_catalog_service(&config, RepositoryStore::Memory)
            .expect("should create catalog service");
        let book = svc.add_book("Анна Каренина", "Лев Толстой", 1877)
            .expect("should add book");

        let res = UpdateBookStatusCommand::new(svc.as_mut())
            .execute(UpdateBookStatusCommandRequest::new(book.book_id.to_string(), "checked out".to_string()));
        assert!(matches!(res, Err(CommandError::Validation{ message: _, reason_code: _ })));
    }

    #[test]
    fn test_should_report_unknown_book() {
        let config = Configuration::new(Path::new("ignored.json"));
        let mut svc = factory::create_catalog_service(&config, RepositoryStore::Memory)
            .expect("should create catalog service");

        let res = UpdateBookStatusCommand::new(svc.as_mut())
            .execute(UpdateBookStatusCommandRequest::new("deadbeef".to_string(), "выдана".to_string()));
        assert!(matches!(res, Err(CommandError::NotFound{ message: _ })));
    }
}
