//! Loader-specific types for table file processing.

use std::path::{Path, PathBuf};

use medtab_types::Table;
use thiserror::Error;

/// Errors that can occur while loading a table file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading the table file.
    #[error("IO error reading table file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON, or not a top-level array of objects.
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Resolved table file paths under a data directory.
#[derive(Debug, Clone, Default)]
pub struct TableFiles {
    /// Path to the CID-10 table file, if present.
    pub cid10: Option<PathBuf>,
    /// Path to the SIGTAP procedures file, if present.
    pub sigtap: Option<PathBuf>,
}

impl TableFiles {
    /// Resolves table files relative to a base directory.
    ///
    /// The CID-10 table is looked for in the conventional `dados/`
    /// subdirectory first, then at the base directory root. The SIGTAP
    /// table has a single fixed location with no fallback. A file that
    /// does not exist resolves to `None` and the corresponding dataset
    /// loads empty.
    pub fn discover<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();

        let cid10 = [
            base.join("dados").join("cid10.json"),
            base.join("cid10.json"),
        ]
        .into_iter()
        .find(|p| p.exists());

        let sigtap = Some(base.join("dados").join("procedimentos.json")).filter(|p| p.exists());

        Self { cid10, sigtap }
    }

    /// Returns the resolved path for a table, if one was found.
    pub fn path_for(&self, table: Table) -> Option<&Path> {
        match table {
            Table::Cid10 => self.cid10.as_deref(),
            Table::Sigtap => self.sigtap.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_prefers_dados_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("dados")).unwrap();
        fs::write(dir.path().join("dados").join("cid10.json"), "[]").unwrap();
        fs::write(dir.path().join("cid10.json"), "[]").unwrap();

        let files = TableFiles::discover(dir.path());
        assert_eq!(
            files.cid10.as_deref(),
            Some(dir.path().join("dados").join("cid10.json").as_path())
        );
    }

    #[test]
    fn test_discover_falls_back_to_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cid10.json"), "[]").unwrap();

        let files = TableFiles::discover(dir.path());
        assert_eq!(
            files.cid10.as_deref(),
            Some(dir.path().join("cid10.json").as_path())
        );
        // SIGTAP has no root-level fallback.
        assert!(files.sigtap.is_none());
    }

    #[test]
    fn test_discover_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = TableFiles::discover(dir.path());
        assert!(files.cid10.is_none());
        assert!(files.sigtap.is_none());
        assert!(files.path_for(Table::Cid10).is_none());
    }

    #[test]
    fn test_discover_finds_sigtap_in_dados() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("dados")).unwrap();
        fs::write(dir.path().join("dados").join("procedimentos.json"), "[]").unwrap();

        let files = TableFiles::discover(dir.path());
        assert!(files.path_for(Table::Sigtap).is_some());
    }
}
