use std::path::{Path, PathBuf};

// Identifiable defines the common handle shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub data_file: PathBuf,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
        }
    }
}
