//! Alpha Enemy - randomized RPG character sheets
//!
//! Looks a creature species up in a species catalog, then grows it to the
//! requested level by scattering boost units over its six attributes.

pub mod config;
pub mod error;
pub mod stats;
pub mod progression;
pub mod data;
pub mod creature;
pub mod sheet;

// Re-export commonly used types
pub use config::Settings;
pub use creature::{BoostState, Creature};
pub use error::GenError;
pub use progression::{Allocation, Level};
pub use sheet::{generate_sheet, CharacterSheet};
pub use stats::{Attribute, Attributes};
