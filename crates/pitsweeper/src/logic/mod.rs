//! Propositional logic representation
//!
//! This module provides the value types the engine reasons over:
//! locations, propositions, literals and clauses.

pub mod core;

// Re-export commonly used types
pub use core::clause::Clause;
pub use core::literal::Literal;
pub use core::proposition::{Location, Proposition, PropositionKind};
