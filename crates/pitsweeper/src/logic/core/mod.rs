//! Core propositional data types

pub mod clause;
pub mod literal;
pub mod proposition;
