//! Attribute fetcher
//!
//! Turns a catalog document into the base attributes, move sample and image a
//! creature starts out with.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{FetchError, SpeciesCatalog, SpeciesRecord};
use crate::error::GenError;
use crate::stats::{Attribute, Attributes};

/// Most moves a creature is generated with
pub const MAX_MOVES: usize = 4;

/// Normalized starting data for one species
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub base: Attributes,
    pub moves: Vec<String>,
    pub image: Option<String>,
}

impl SpeciesData {
    /// Derive starting data from a catalog document
    ///
    /// Base HP is halved (integer division) to match tabletop hit-point
    /// scales; the other attributes are taken as-is. Entries for stats outside
    /// the six tracked attributes are skipped, and tracked stats missing from
    /// the document start at 0.
    pub fn from_record(record: &SpeciesRecord, rng: &mut impl Rng) -> Result<Self, FetchError> {
        let mut base = Attributes::default();
        let mut recognised = 0;

        for entry in &record.stats {
            match Attribute::from_catalog_name(&entry.stat.name) {
                Some(attr) => {
                    base.set(attr, base_value(attr, entry.base_stat));
                    recognised += 1;
                }
                None => log::debug!("Ignoring unknown stat '{}'", entry.stat.name),
            }
        }

        if recognised == 0 {
            return Err(FetchError::Empty);
        }

        Ok(Self {
            base,
            moves: sample_moves(record, rng),
            image: record.sprites.front_default.clone(),
        })
    }
}

/// Starting value for `attr` given the catalog's raw base stat
pub fn base_value(attr: Attribute, raw: u32) -> u32 {
    match attr {
        Attribute::Health => raw / 2,
        _ => raw,
    }
}

/// Pick up to `MAX_MOVES` distinct moves uniformly at random
pub fn sample_moves(record: &SpeciesRecord, rng: &mut impl Rng) -> Vec<String> {
    record
        .moves
        .choose_multiple(rng, MAX_MOVES)
        .map(|entry| entry.move_.name.clone())
        .collect()
}

/// Normalize a user-supplied species identifier for lookup
pub fn normalize_species(species: &str) -> String {
    species.trim().to_lowercase()
}

/// Look `species` up in `catalog` and derive its starting data
///
/// Any lookup failure, whether the catalog was unreachable or returned
/// something other than a species document, is reported as
/// `GenError::InvalidSpecies`.
pub fn fetch_species(
    catalog: &impl SpeciesCatalog,
    species: &str,
    rng: &mut impl Rng,
) -> Result<SpeciesData, GenError> {
    let invalid = |e: FetchError| {
        log::debug!("Lookup for '{}' failed: {}", species, e);
        GenError::InvalidSpecies {
            species: species.to_string(),
            reason: e.to_string(),
        }
    };

    let record = catalog.lookup(species).map_err(invalid)?;
    SpeciesData::from_record(&record, rng).map_err(invalid)
}
