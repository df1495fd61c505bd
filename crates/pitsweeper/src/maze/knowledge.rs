//! Tile knowledge: what an agent has proven about the maze so far.
//!
//! `MazeKnowledge` couples a [`KnowledgeBase`] with the authoritative sets
//! of confirmed pits and safe tiles. It owns the bookkeeping that must stay
//! in step with the clause set: every confirmed location is told as a unit
//! fact and the clause set is simplified after each batch.

use super::perception::{perception_clauses, TileKind};
use crate::config::QueryConfig;
use crate::error::{KnowledgeError, Result};
use crate::kb::KnowledgeBase;
use crate::logic::{Clause, Location, Proposition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// What is known about one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Safety {
    /// Proven free of pits
    Safe,
    /// Proven to hold a pit
    Pit,
    /// Neither could be proven
    Unknown,
}

/// Knowledge base plus confirmed pit and safe locations
#[derive(Debug, Clone, Default)]
pub struct MazeKnowledge {
    kb: KnowledgeBase,
    known_pits: BTreeSet<Location>,
    known_safe: BTreeSet<Location>,
}

impl MazeKnowledge {
    pub fn new() -> Self {
        MazeKnowledge::default()
    }

    pub fn with_config(config: QueryConfig) -> Self {
        MazeKnowledge {
            kb: KnowledgeBase::with_config(config),
            ..MazeKnowledge::default()
        }
    }

    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn known_pits(&self) -> &BTreeSet<Location> {
        &self.known_pits
    }

    pub fn known_safe(&self) -> &BTreeSet<Location> {
        &self.known_safe
    }

    /// Record what the agent perceives at `location`.
    ///
    /// `neighbors` are the playable cardinal neighbours, as reported by the
    /// environment.
    pub fn observe(
        &mut self,
        location: Location,
        tile: TileKind,
        neighbors: &[Location],
    ) -> Result<()> {
        let clauses = perception_clauses(location, tile, neighbors)?;
        if tile.is_pit() {
            self.mark_pit(location)?;
        } else {
            self.mark_safe(location)?;
        }
        let added = self.kb.tell_all(clauses);
        debug!(%location, ?tile, added, "observed tile");
        self.simplify()
    }

    /// Confirm a pit. Returns `false` if it was already known.
    pub fn mark_pit(&mut self, location: Location) -> Result<bool> {
        if self.known_safe.contains(&location) {
            return Err(KnowledgeError::ConflictingFacts { location });
        }
        if !self.known_pits.insert(location) {
            return Ok(false);
        }
        self.kb.tell(Clause::unit(Proposition::pit(location), true));
        Ok(true)
    }

    /// Confirm a safe tile. Returns `false` if it was already known.
    pub fn mark_safe(&mut self, location: Location) -> Result<bool> {
        if self.known_pits.contains(&location) {
            return Err(KnowledgeError::ConflictingFacts { location });
        }
        if !self.known_safe.insert(location) {
            return Ok(false);
        }
        self.kb.tell(Clause::unit(Proposition::pit(location), false));
        Ok(true)
    }

    /// Simplify the clause set with every confirmed location
    pub fn simplify(&mut self) -> Result<()> {
        self.kb.simplify(&self.known_pits, &self.known_safe)
    }

    /// Classify one location: confirmed sets first, then entailment queries
    pub fn classify(&self, location: Location) -> Safety {
        if self.known_safe.contains(&location) {
            return Safety::Safe;
        }
        if self.known_pits.contains(&location) {
            return Safety::Pit;
        }

        let pit = Proposition::pit(location);
        if self.kb.ask(&Clause::unit(pit, true)) {
            Safety::Pit
        } else if self.kb.ask(&Clause::unit(pit, false)) {
            Safety::Safe
        } else {
            Safety::Unknown
        }
    }

    /// Classify every candidate and commit whatever was proven.
    ///
    /// Each candidate is queried about its own location. Newly proven
    /// locations are collected during the scan and committed afterwards,
    /// followed by a single simplification pass.
    pub fn settle<I>(&mut self, candidates: I) -> Result<Vec<(Location, Safety)>>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut results = Vec::new();
        let mut proven_pits = BTreeSet::new();
        let mut proven_safe = BTreeSet::new();

        for candidate in candidates {
            let safety = self.classify(candidate);
            match safety {
                Safety::Pit if !self.known_pits.contains(&candidate) => {
                    proven_pits.insert(candidate);
                }
                Safety::Safe if !self.known_safe.contains(&candidate) => {
                    proven_safe.insert(candidate);
                }
                _ => {}
            }
            results.push((candidate, safety));
        }

        if !proven_pits.is_empty() || !proven_safe.is_empty() {
            for location in &proven_pits {
                self.mark_pit(*location)?;
            }
            for location in &proven_safe {
                self.mark_safe(*location)?;
            }
            debug!(
                pits = proven_pits.len(),
                safe = proven_safe.len(),
                "settled candidates"
            );
            self.simplify()?;
        }
        Ok(results)
    }
}
