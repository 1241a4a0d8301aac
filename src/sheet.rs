//! Character sheets
//!
//! The generation request/response boundary: species and level in, a flat
//! serializable sheet out.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::creature::Creature;
use crate::data::SpeciesCatalog;
use crate::error::GenError;
use crate::stats::{Attribute, Attributes};

/// Finished character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub species: String,
    pub level: u32,
    #[serde(flatten)]
    pub attributes: Attributes,
    pub moves: Vec<String>,
    pub image: Option<String>,
}

impl CharacterSheet {
    /// Snapshot a creature's current state
    pub fn from_creature(creature: &Creature) -> Self {
        Self {
            species: creature.species().to_string(),
            level: creature.level().get(),
            attributes: *creature.attributes(),
            moves: creature.moves().to_vec(),
            image: creature.image().map(str::to_string),
        }
    }
}

impl fmt::Display for CharacterSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Lv. {})", self.species, self.level)?;
        for attr in Attribute::ALL {
            writeln!(f, "  {:<8} {:>4}", attr.label(), self.attributes.get(attr))?;
        }
        if self.moves.is_empty() {
            writeln!(f, "  Moves    -")?;
        } else {
            writeln!(f, "  Moves    {}", self.moves.join(", "))?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "  Image    {}", image)?;
        }
        Ok(())
    }
}

/// Generate a fully grown character sheet
pub fn generate_sheet(
    catalog: &impl SpeciesCatalog,
    species: &str,
    level: u32,
    rng: &mut impl Rng,
) -> Result<CharacterSheet, GenError> {
    let mut creature = Creature::new(catalog, species, level, rng)?;
    let allocation = creature.grow(rng)?;

    log::info!(
        "Generated {} at level {} with {} boost units",
        creature.species(),
        creature.level(),
        allocation.total()
    );

    Ok(CharacterSheet::from_creature(&creature))
}
