//! Error types for pitsweeper

use crate::logic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Clause is a tautology: {0}")]
    Tautology(String),

    #[error("Location {location} is recorded both as a pit and as safe")]
    ConflictingFacts { location: Location },

    #[error("Clue at {location} reports {count} pits but only {neighbors} neighbours exist")]
    ClueOutOfRange {
        location: Location,
        count: u8,
        neighbors: usize,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KnowledgeError>;
