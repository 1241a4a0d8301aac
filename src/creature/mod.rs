//! Generated creatures
//!
//! A creature is built once from a species and level, grown exactly once,
//! then read.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{fetch_species, normalize_species, SpeciesCatalog, SpeciesData};
use crate::error::GenError;
use crate::progression::{generate_allocation, Allocation, Level};
use crate::stats::Attributes;

/// Whether level-up growth has been applied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoostState {
    #[default]
    Unboosted,
    Boosted,
}

/// A generated creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Lower-cased species identifier
    species: String,
    level: Level,
    attributes: Attributes,
    moves: Vec<String>,
    image: Option<String>,
    boost: BoostState,
}

impl Creature {
    /// Build a creature by looking `species` up in `catalog`
    ///
    /// The level is checked before the catalog is consulted.
    pub fn new(
        catalog: &impl SpeciesCatalog,
        species: &str,
        level: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, GenError> {
        let level = Level::new(level)?;
        let species = normalize_species(species);
        let data = fetch_species(catalog, &species, rng)?;
        Ok(Self::from_species_data(species, level, data))
    }

    /// Build an unboosted creature from already-fetched data
    pub fn from_species_data(species: impl Into<String>, level: Level, data: SpeciesData) -> Self {
        Self {
            species: species.into(),
            level,
            attributes: data.base,
            moves: data.moves,
            image: data.image,
            boost: BoostState::Unboosted,
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn boost_state(&self) -> BoostState {
        self.boost
    }

    pub fn is_boosted(&self) -> bool {
        self.boost == BoostState::Boosted
    }

    /// Roll a growth allocation for this creature's level
    pub fn generate_allocation(&self, rng: &mut impl Rng) -> Allocation {
        generate_allocation(self.level, rng)
    }

    /// Apply a growth allocation
    ///
    /// Fails with `GenError::AlreadyBoosted`, leaving the attributes alone,
    /// if an allocation was applied before.
    pub fn apply_allocation(&mut self, allocation: &Allocation) -> Result<(), GenError> {
        match self.boost {
            BoostState::Boosted => Err(GenError::AlreadyBoosted),
            BoostState::Unboosted => {
                allocation.apply_to(&mut self.attributes);
                self.boost = BoostState::Boosted;
                Ok(())
            }
        }
    }

    /// Roll and apply growth in one step, returning what was applied
    pub fn grow(&mut self, rng: &mut impl Rng) -> Result<Allocation, GenError> {
        if self.is_boosted() {
            return Err(GenError::AlreadyBoosted);
        }
        let allocation = self.generate_allocation(rng);
        self.apply_allocation(&allocation)?;
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FetchError, FileCatalog, MemoryCatalog, SpeciesRecord};
    use crate::stats::Attribute;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    fn creature(level: u32, base: Attributes) -> Creature {
        let data = SpeciesData {
            base,
            ..Default::default()
        };
        Creature::from_species_data("ditto", Level::new(level).unwrap(), data)
    }

    /// Catalog that counts how often it was asked
    struct CountingCatalog {
        calls: Cell<u32>,
    }

    impl SpeciesCatalog for CountingCatalog {
        fn lookup(&self, _species: &str) -> Result<SpeciesRecord, FetchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(SpeciesRecord::default().with_stat("hp", 6))
        }
    }

    #[test]
    fn test_constructor_happy() {
        let mut rng = StdRng::seed_from_u64(0);
        let catalog = MemoryCatalog::new().with(
            "cryogonal",
            SpeciesRecord::default().with_stat("hp", 6).with_move("ice-beam"),
        );
        let c = Creature::new(&catalog, "Cryogonal", 2, &mut rng).unwrap();

        assert_eq!(c.species(), "cryogonal");
        assert_eq!(c.level().get(), 2);
        assert_eq!(*c.attributes(), Attributes::new(3, 0, 0, 0, 0, 0));
        assert_eq!(c.moves(), ["ice-beam".to_string()]);
        assert_eq!(c.boost_state(), BoostState::Unboosted);
    }

    #[test]
    fn test_invalid_level_skips_lookup() {
        let mut rng = StdRng::seed_from_u64(0);
        let catalog = CountingCatalog { calls: Cell::new(0) };

        for level in [0, 101] {
            let err = Creature::new(&catalog, "agumon", level, &mut rng).unwrap_err();
            assert_eq!(err, GenError::InvalidLevel(level));
        }
        assert_eq!(catalog.calls.get(), 0);

        assert!(Creature::new(&catalog, "patamon", 50, &mut rng).is_ok());
        assert_eq!(catalog.calls.get(), 1);
    }

    #[test]
    fn test_invalid_species() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Creature::new(&MemoryCatalog::new(), "big chungus", 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidSpecies { ref species, .. } if species == "big chungus"
        ));
    }

    #[test]
    fn test_unparseable_document_is_invalid_species() {
        let mut rng = StdRng::seed_from_u64(0);
        let dir = std::env::temp_dir().join(format!("alpha-enemy-creature-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("missingno.json"), "<html>oops</html>").unwrap();
        let catalog = FileCatalog::new(&dir);

        let err = Creature::new(&catalog, "MissingNo", 5, &mut rng).unwrap_err();
        match err {
            GenError::InvalidSpecies { species, reason } => {
                assert_eq!(species, "missingno");
                assert!(reason.starts_with("parse error"), "reason was {}", reason);
            }
            other => panic!("expected InvalidSpecies, got {:?}", other),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_boosts() {
        let mut c = creature(7, Attributes::new(24, 48, 48, 48, 48, 48));
        let boosts = Allocation::from_counts(Attribute::ALL.map(|a| (a, 3)));
        let expected = Attributes::new(
            24 + 3 * 3,
            48 + 3 * 4,
            48 + 3 * 6,
            48 + 3 * 4,
            48 + 3 * 6,
            48 + 3 * 3,
        );

        assert!(!c.is_boosted());

        c.apply_allocation(&boosts).unwrap();
        assert!(c.is_boosted());
        assert_eq!(*c.attributes(), expected);

        // Re-boosting is refused and changes nothing
        assert_eq!(c.apply_allocation(&boosts), Err(GenError::AlreadyBoosted));
        assert_eq!(*c.attributes(), expected);
        assert_eq!(c.boost_state(), BoostState::Boosted);
    }

    #[test]
    fn test_level_one_growth_is_noop() {
        let mut rng = StdRng::seed_from_u64(11);
        let base = Attributes::new(20, 55, 40, 50, 50, 90);
        let mut c = creature(1, base);

        let applied = c.grow(&mut rng).unwrap();
        assert!(applied.is_empty());
        assert_eq!(*c.attributes(), base);
        assert!(c.is_boosted());
    }

    #[test]
    fn test_grow_matches_allocation() {
        let mut rng = StdRng::seed_from_u64(5);
        let base = Attributes::uniform(10);
        let mut c = creature(50, base);

        let applied = c.grow(&mut rng).unwrap();
        assert_eq!(applied.total(), 3 * 49);
        for attr in Attribute::ALL {
            assert_eq!(c.attributes().get(attr), base.get(attr) + applied.points_for(attr));
        }

        assert_eq!(c.grow(&mut rng), Err(GenError::AlreadyBoosted));
    }
}
