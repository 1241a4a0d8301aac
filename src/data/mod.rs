//! Species data
//!
//! This module handles looking species up in an external catalog and
//! normalizing the result into a creature's starting data.

pub mod schema;
pub mod catalog;
pub mod pokeapi;
pub mod files;
pub mod fetcher;

pub use schema::SpeciesRecord;
pub use catalog::{FetchError, MemoryCatalog, SpeciesCatalog};
pub use pokeapi::{PokeApiClient, PokeApiConfig};
pub use files::FileCatalog;
pub use fetcher::{SpeciesData, fetch_species, normalize_species, MAX_MOVES};
