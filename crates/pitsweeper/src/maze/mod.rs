//! Agent-facing maze layer
//!
//! Encodes tile perceptions as clauses and keeps the confirmed pit/safe sets
//! in step with the knowledge base. Move selection and the maze itself live
//! with the caller.

pub mod knowledge;
pub mod perception;

pub use knowledge::{MazeKnowledge, Safety};
pub use perception::{clue_clauses, perception_clauses, TileKind};
