//! Pitsweeper: a propositional inference engine for pit-maze agents
//!
//! This library provides a CNF knowledge base over "tile T is a pit"
//! propositions, with resolution-refutation entailment queries and
//! simplification from confirmed tile states.

pub mod config;
pub mod error;
pub mod generating;
pub mod json;
pub mod kb;
pub mod logic;
pub mod maze;
pub mod parser;
pub mod simplifying;
pub mod state;

// Re-export commonly used types from logic
pub use logic::{Clause, Literal, Location, Proposition, PropositionKind};

pub use config::{QueryConfig, QueryOptions};
pub use error::{KnowledgeError, Result};
pub use generating::resolve;
pub use kb::KnowledgeBase;
pub use maze::{clue_clauses, perception_clauses, MazeKnowledge, Safety, TileKind};
pub use parser::{parse_clause, parse_clauses, parse_literal};
pub use simplifying::{get_simplified_clauses, simplify_from_known_locations};
pub use state::{Derivation, Proof, ProofStep, QueryOutcome, QueryStats};
