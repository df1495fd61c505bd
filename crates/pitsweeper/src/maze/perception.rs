//! Turning tile perceptions into clauses.
//!
//! A warning tile showing `k` says exactly `k` of its playable neighbours are
//! pits. In CNF that is two families of clauses over the `n` neighbours:
//!
//! - at least `k`: every subset of `n - k + 1` neighbours holds a pit
//! - at most `k`: every subset of `k + 1` neighbours holds a safe tile
//!
//! The edge cases fall out of the same rule: `k = 0` gives one negative unit
//! per neighbour, `k = n` one positive unit per neighbour.

use crate::error::{KnowledgeError, Result};
use crate::logic::{Clause, Literal, Location, Proposition};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the agent perceives on the tile it stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Start,
    Goal,
    /// Safe, and no neighbour is a pit
    Safe,
    /// Safe, and this many neighbours are pits
    Warning(u8),
    Pit,
}

impl TileKind {
    /// Decode a maze symbol: `@` start, `G` goal, `.` safe, `1`-`4` warning,
    /// `P` pit. `0` is accepted as a synonym for `.`.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '@' => Ok(TileKind::Start),
            'G' => Ok(TileKind::Goal),
            '.' | '0' => Ok(TileKind::Safe),
            '1'..='4' => Ok(TileKind::Warning(symbol as u8 - b'0')),
            'P' => Ok(TileKind::Pit),
            other => Err(KnowledgeError::Parse(format!("unknown tile symbol {:?}", other))),
        }
    }

    pub fn is_pit(&self) -> bool {
        matches!(self, TileKind::Pit)
    }

    /// Number of neighbouring pits this tile reports, if it reports one.
    ///
    /// Start and goal tiles carry no clue.
    pub fn clue(&self) -> Option<u8> {
        match self {
            TileKind::Safe => Some(0),
            TileKind::Warning(count) => Some(*count),
            TileKind::Start | TileKind::Goal | TileKind::Pit => None,
        }
    }
}

/// Clauses stating that exactly `count` of `neighbors` are pits.
///
/// Duplicate neighbours are ignored.
pub fn clue_clauses(location: Location, count: u8, neighbors: &[Location]) -> Result<Vec<Clause>> {
    let neighbors: Vec<Location> = neighbors
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let n = neighbors.len();
    let k = count as usize;
    if k > n {
        return Err(KnowledgeError::ClueOutOfRange {
            location,
            count,
            neighbors: n,
        });
    }

    let mut clauses = Vec::new();
    // At least k pits
    if k > 0 {
        for subset in neighbors.iter().copied().combinations(n - k + 1) {
            clauses.push(subset.into_iter().map(|loc| Literal::pit(loc, true)).collect());
        }
    }
    // At most k pits
    if k < n {
        for subset in neighbors.iter().copied().combinations(k + 1) {
            clauses.push(subset.into_iter().map(|loc| Literal::pit(loc, false)).collect());
        }
    }
    Ok(clauses)
}

/// Every clause a perception at `location` contributes.
///
/// That is the tile's own status, the warning fact for warning tiles and the
/// clue clauses over `neighbors`. Pits reveal nothing about their neighbours.
pub fn perception_clauses(
    location: Location,
    tile: TileKind,
    neighbors: &[Location],
) -> Result<Vec<Clause>> {
    if tile.is_pit() {
        return Ok(vec![Clause::unit(Proposition::pit(location), true)]);
    }

    let mut clauses = vec![Clause::unit(Proposition::pit(location), false)];
    if let TileKind::Warning(count) = tile {
        clauses.push(Clause::unit(Proposition::warning(count, location), true));
    }
    if let Some(count) = tile.clue() {
        clauses.extend(clue_clauses(location, count, neighbors)?);
    }
    Ok(clauses)
}
