//! Species catalog sources
//!
//! A catalog maps a normalized species identifier to its `SpeciesRecord`.
//! The HTTP client and the on-disk catalog live in their own modules; the
//! in-memory catalog here is handy for embedding and tests.

use std::collections::HashMap;

use thiserror::Error;

use super::SpeciesRecord;

/// Why a catalog lookup failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalog could not be reached
    #[error("network error: {0}")]
    Network(String),
    /// A local catalog document could not be read
    #[error("io error: {0}")]
    Io(String),
    /// The catalog answered with a non-success status
    #[error("catalog returned status {0}")]
    Status(u16),
    /// The catalog body was not a species document
    #[error("parse error: {0}")]
    Parse(String),
    /// The catalog has no entry for the species
    #[error("no entry for species")]
    NotFound,
    /// The document carried none of the tracked stats
    #[error("document has no recognised stats")]
    Empty,
}

/// Source of species documents
pub trait SpeciesCatalog {
    /// Look up the document for an already-normalized species identifier
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError>;
}

impl<C: SpeciesCatalog + ?Sized> SpeciesCatalog for &C {
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError> {
        (**self).lookup(species)
    }
}

impl<C: SpeciesCatalog + ?Sized> SpeciesCatalog for Box<C> {
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError> {
        (**self).lookup(species)
    }
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    records: HashMap<String, SpeciesRecord>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record under `species` (stored lower-cased)
    pub fn insert(&mut self, species: &str, record: SpeciesRecord) {
        self.records.insert(species.to_lowercase(), record);
    }

    pub fn with(mut self, species: &str, record: SpeciesRecord) -> Self {
        self.insert(species, record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SpeciesCatalog for MemoryCatalog {
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError> {
        self.records.get(species).cloned().ok_or(FetchError::NotFound)
    }
}
