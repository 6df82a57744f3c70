use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// JsonBookRepository keeps the whole catalog in a single JSON array file and
// rewrites that file on every save.
#[derive(Debug)]
pub struct JsonBookRepository {
    data_file: PathBuf,
}

impl JsonBookRepository {
    pub(crate) fn new(data_file: &Path) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for JsonBookRepository {
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        // a missing data file is a valid empty catalog, not an error
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(self.data_file.as_path())?;
        let books: Vec<BookEntity> = serde_json::from_str(data.as_str())?;
        debug!("loaded {} books from {}", books.len(), self.data_file.display());
        Ok(books)
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        // pretty-printed so the file stays hand-editable; serde_json keeps
        // non-ASCII titles and authors unescaped
        let json = serde_json::to_string_pretty(entities)?;
        // write a sibling temp file and rename it over the target, so an
        // interrupted save cannot leave a truncated catalog behind
        let dir = match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.data_file.as_path()).map_err(|err| err.error)?;
        debug!("saved {} books to {}", entities.len(), self.data_file.display());
        Ok(())
    }
}

impl BookRepository for JsonBookRepository {
    fn describe(&self) -> String {
        format!("json file {}", self.data_file.display())
    }
}
