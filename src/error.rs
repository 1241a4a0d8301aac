//! Error types for character generation

use thiserror::Error;

use crate::progression::{MAX_LEVEL, MIN_LEVEL};

/// Errors surfaced at the generation boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Requested level is outside the supported range
    #[error("Level must be in the range {min}-{max}, got {0}", min = MIN_LEVEL, max = MAX_LEVEL)]
    InvalidLevel(u32),

    /// Catalog had no usable data for the species
    #[error("Invalid species '{species}': {reason}")]
    InvalidSpecies { species: String, reason: String },

    /// Growth allocation was already applied to this creature
    #[error("Boosts have already been applied")]
    AlreadyBoosted,
}

impl GenError {
    /// Short code reported to the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            GenError::InvalidLevel(_) => "bad-level",
            GenError::InvalidSpecies { .. } => "bad-species",
            GenError::AlreadyBoosted => "already-boosted",
        }
    }
}
