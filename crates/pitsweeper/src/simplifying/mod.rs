//! Simplifying rules: shrink a clause set without losing information.

pub mod known_locations;
pub mod subsumption;

pub use known_locations::{get_simplified_clauses, simplify_from_known_locations};
pub use subsumption::{is_subsumed, remove_subsumed};
