use crate::utils::error::Result;
use std::path::Path;

/// Whole-file text storage used by the translator.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Writes `contents` in one call, creating or truncating `path`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
