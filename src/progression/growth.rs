//! Level-up growth
//!
//! Every level past 1 hands out `DRAWS_PER_LEVEL` boost units, each landing on
//! a uniformly random attribute. A boost unit is worth a fixed number of
//! points that depends on the attribute it landed on.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Level;
use crate::stats::{Attribute, Attributes};

/// Boost units handed out per level gained
pub const DRAWS_PER_LEVEL: u32 = 3;

/// Points gained per boost unit, indexed by `Attribute::index`
pub const GROWTH_TABLE: [u32; 6] = [
    3, // hp
    4, // attack
    6, // defense
    4, // special-attack
    6, // special-defense
    3, // speed
];

/// Points a single boost unit adds to `attr`
pub const fn points_per_boost(attr: Attribute) -> u32 {
    GROWTH_TABLE[attr.index()]
}

/// Boost units assigned to each attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    counts: [u32; 6],
}

impl Allocation {
    /// Empty allocation (no boosts)
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocation with the given count per attribute
    pub fn from_counts(counts: impl IntoIterator<Item = (Attribute, u32)>) -> Self {
        let mut allocation = Self::new();
        for (attr, count) in counts {
            let slot = &mut allocation.counts[attr.index()];
            *slot = slot.saturating_add(count);
        }
        allocation
    }

    pub fn get(&self, attr: Attribute) -> u32 {
        self.counts[attr.index()]
    }

    /// Add one boost unit to `attr`
    pub fn add(&mut self, attr: Attribute) {
        let slot = &mut self.counts[attr.index()];
        *slot = slot.saturating_add(1);
    }

    /// Total boost units across all attributes
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &c| acc.saturating_add(c))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate attributes that received at least one boost
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |a| (a, self.get(a)))
            .filter(|&(_, count)| count > 0)
    }

    /// Points this allocation adds to `attr`, capped at `u32::MAX`
    pub fn points_for(&self, attr: Attribute) -> u32 {
        self.get(attr).saturating_mul(points_per_boost(attr))
    }

    /// Add this allocation's points onto `attributes`, saturating at `u32::MAX`
    pub(crate) fn apply_to(&self, attributes: &mut Attributes) {
        for (attr, _) in self.iter() {
            let value = attributes.get_mut(attr);
            *value = value.saturating_add(self.points_for(attr));
        }
    }
}

/// Randomly distribute boost units for a creature of `level`
pub fn generate_allocation(level: Level, rng: &mut impl Rng) -> Allocation {
    let mut allocation = Allocation::new();

    for _ in 0..level.levels_gained() {
        for _ in 0..DRAWS_PER_LEVEL {
            // ALL is non-empty, so choose always yields
            if let Some(&attr) = Attribute::ALL.choose(rng) {
                allocation.add(attr);
            }
        }
    }

    log::debug!(
        "Generated {} boost units for level {}",
        allocation.total(),
        level
    );
    allocation
}

/// Boost units a creature of `level` receives in total
pub fn expected_boosts(level: Level) -> u32 {
    level.levels_gained() * DRAWS_PER_LEVEL
}
