//! Clause notation parsing

pub mod notation;

pub use notation::{parse_clause, parse_clauses, parse_literal};
