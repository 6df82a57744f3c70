use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(store, config.data_file.as_path());
    Ok(Box::new(CatalogServiceImpl::new(book_repo)?))
}
