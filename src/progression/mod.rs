//! Progression systems

pub mod level;
pub mod growth;

pub use level::{Level, MIN_LEVEL, MAX_LEVEL};
pub use growth::{
    Allocation, DRAWS_PER_LEVEL, GROWTH_TABLE, generate_allocation, expected_boosts,
    points_per_boost,
};
