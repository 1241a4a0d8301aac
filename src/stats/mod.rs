//! Creature attributes
//!
//! The six tracked attributes and the value block that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six attributes every creature carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    #[serde(rename = "hp")]
    Health,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Attribute {
    /// All attributes, in catalog order
    pub const ALL: [Attribute; 6] = [
        Attribute::Health,
        Attribute::Attack,
        Attribute::Defense,
        Attribute::SpecialAttack,
        Attribute::SpecialDefense,
        Attribute::Speed,
    ];

    /// Position of this attribute in `ALL`
    pub const fn index(self) -> usize {
        match self {
            Attribute::Health => 0,
            Attribute::Attack => 1,
            Attribute::Defense => 2,
            Attribute::SpecialAttack => 3,
            Attribute::SpecialDefense => 4,
            Attribute::Speed => 5,
        }
    }

    /// Name used by the species catalog
    pub fn catalog_name(&self) -> &'static str {
        match self {
            Attribute::Health => "hp",
            Attribute::Attack => "attack",
            Attribute::Defense => "defense",
            Attribute::SpecialAttack => "special-attack",
            Attribute::SpecialDefense => "special-defense",
            Attribute::Speed => "speed",
        }
    }

    /// Look up an attribute by its catalog name
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.catalog_name() == name)
    }

    /// Short label for sheet output
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Health => "HP",
            Attribute::Attack => "Attack",
            Attribute::Defense => "Defense",
            Attribute::SpecialAttack => "Sp. Atk",
            Attribute::SpecialDefense => "Sp. Def",
            Attribute::Speed => "Speed",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

/// Attribute values for a creature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Attributes {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Same value for every attribute
    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Health => self.hp,
            Attribute::Attack => self.attack,
            Attribute::Defense => self.defense,
            Attribute::SpecialAttack => self.special_attack,
            Attribute::SpecialDefense => self.special_defense,
            Attribute::Speed => self.speed,
        }
    }

    pub fn get_mut(&mut self, attr: Attribute) -> &mut u32 {
        match attr {
            Attribute::Health => &mut self.hp,
            Attribute::Attack => &mut self.attack,
            Attribute::Defense => &mut self.defense,
            Attribute::SpecialAttack => &mut self.special_attack,
            Attribute::SpecialDefense => &mut self.special_defense,
            Attribute::Speed => &mut self.speed,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: u32) {
        *self.get_mut(attr) = value;
    }

    /// Iterate `(attribute, value)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Sum of all six values, capped at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.iter().fold(0u32, |acc, (_, v)| acc.saturating_add(v))
    }
}
