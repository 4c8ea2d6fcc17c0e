use crate::core::Storage;
use crate::utils::error::{Result, TranslateError};
use std::fs;
use std::path::{Path, PathBuf};

/// Local file system storage. Relative paths resolve against `base_path`,
/// or against the process working directory when there is none.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    pub fn current_dir() -> Self {
        Self { base_path: None }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(|source| TranslateError::InputError {
            path: full_path.display().to_string(),
            source,
        })
    }

    // parent directories are not created
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, contents).map_err(|source| TranslateError::OutputError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
