//! Creature level
//!
//! Levels are validated once at construction so the growth math never sees
//! an out-of-range value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GenError;

/// Lowest level a creature can be generated at
pub const MIN_LEVEL: u32 = 1;
/// Highest level a creature can be generated at
pub const MAX_LEVEL: u32 = 100;

/// A level in `MIN_LEVEL..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    pub fn new(level: u32) -> Result<Self, GenError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(GenError::InvalidLevel(level))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Levels gained past level 1
    pub fn levels_gained(self) -> u32 {
        self.0 - MIN_LEVEL
    }
}

impl TryFrom<u32> for Level {
    type Error = GenError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
