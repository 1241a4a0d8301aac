//! On-disk species catalog
//!
//! Reads species documents from a directory of `<species>.json` files, laid
//! out the same way the HTTP catalog serves them. Useful offline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{FetchError, SpeciesCatalog, SpeciesRecord};

/// Catalog backed by a directory of JSON documents
#[derive(Debug, Clone)]
pub struct FileCatalog {
    base_path: PathBuf,
}

impl FileCatalog {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the document for `species`
    pub fn document_path(&self, species: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", species))
    }
}

impl SpeciesCatalog for FileCatalog {
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError> {
        // Identifiers come from user input; keep them inside the catalog dir
        if species.is_empty()
            || species.contains(|c: char| c == '/' || c == '\\')
            || species.starts_with('.')
        {
            return Err(FetchError::NotFound);
        }

        let path = self.document_path(species);
        log::debug!("Reading species document {:?}", path);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(FetchError::NotFound),
            Err(e) => return Err(FetchError::Io(format!("failed to read {:?}: {}", path, e))),
        };

        SpeciesRecord::from_json(&content).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_catalog(name: &str) -> FileCatalog {
        let dir = std::env::temp_dir().join(format!("alpha-enemy-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        FileCatalog::new(dir)
    }

    #[test]
    fn test_reads_document() {
        let catalog = temp_catalog("read");
        fs::write(
            catalog.document_path("ditto"),
            r#"{"stats": [{"base_stat": 48, "stat": {"name": "hp"}}]}"#,
        )
        .unwrap();

        let record = catalog.lookup("ditto").unwrap();
        assert_eq!(record.stats[0].base_stat, 48);

        let _ = fs::remove_dir_all(catalog.base_path());
    }

    #[test]
    fn test_missing_and_malformed() {
        let catalog = temp_catalog("missing");
        fs::write(catalog.document_path("broken"), "<html>oops</html>").unwrap();

        assert!(matches!(catalog.lookup("agumon"), Err(FetchError::NotFound)));
        assert!(matches!(catalog.lookup("broken"), Err(FetchError::Parse(_))));

        let _ = fs::remove_dir_all(catalog.base_path());
    }

    #[test]
    fn test_rejects_path_traversal() {
        let catalog = temp_catalog("traversal");
        assert!(matches!(catalog.lookup("../etc/passwd"), Err(FetchError::NotFound)));
        assert!(matches!(catalog.lookup(""), Err(FetchError::NotFound)));

        let _ = fs::remove_dir_all(catalog.base_path());
    }
}
