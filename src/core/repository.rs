use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // load the stored entities, in stored order
    fn load_all(&self) -> LibraryResult<Vec<Entity>>;

    // replace the stored sequence with the given one
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RepositoryStore {
    JsonFile,
    Memory,
}
