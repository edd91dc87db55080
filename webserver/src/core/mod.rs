//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod generators;
pub mod roster;

// Re-export commonly used types
pub use generators::{generate, RandomGenerator, SnakeDraftGenerator, TeamGenerator, WeightedRandomGenerator};
pub use roster::{check_categories, parse_headers, parse_people, score_people, Person, ScoredPerson};
