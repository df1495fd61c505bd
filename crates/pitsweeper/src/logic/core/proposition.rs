//! Propositions: named boolean variables over maze locations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate as `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub col: i32,
    pub row: i32,
}

impl Location {
    pub const fn new(col: i32, row: i32) -> Self {
        Location { col, row }
    }

    /// The orthogonal neighbours, in N, E, S, W order.
    ///
    /// Neighbours that would fall outside the `i32` coordinate range are
    /// left out. No other bounds checking happens here; the environment
    /// decides which of these are playable tiles.
    pub fn cardinal_neighbors(&self) -> Vec<Location> {
        [
            self.row.checked_sub(1).map(|row| Location::new(self.col, row)),
            self.col.checked_add(1).map(|col| Location::new(col, self.row)),
            self.row.checked_add(1).map(|row| Location::new(self.col, row)),
            self.col.checked_sub(1).map(|col| Location::new(col, self.row)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Manhattan distance to another location
    pub fn distance(&self, other: &Location) -> u64 {
        u64::from(self.col.abs_diff(other.col)) + u64::from(self.row.abs_diff(other.row))
    }
}

impl From<(i32, i32)> for Location {
    fn from((col, row): (i32, i32)) -> Self {
        Location::new(col, row)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// What a proposition states about its location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropositionKind {
    /// The location holds a pit
    Pit,
    /// The location shows a warning clue with the given count
    Warning(u8),
}

impl PropositionKind {
    /// Short symbol used in clause notation (`P`, `W3`, ...)
    pub fn symbol(&self) -> String {
        match self {
            PropositionKind::Pit => "P".to_string(),
            PropositionKind::Warning(count) => format!("W{}", count),
        }
    }
}

/// A boolean variable: `kind` holds at `location`.
///
/// Propositions are plain values; two with the same kind and location are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Proposition {
    pub kind: PropositionKind,
    pub location: Location,
}

impl Proposition {
    pub const fn new(kind: PropositionKind, location: Location) -> Self {
        Proposition { kind, location }
    }

    /// "There is a pit at `location`"
    pub const fn pit(location: Location) -> Self {
        Proposition::new(PropositionKind::Pit, location)
    }

    /// "`location` shows a warning of `count`"
    pub const fn warning(count: u8, location: Location) -> Self {
        Proposition::new(PropositionKind::Warning(count), location)
    }

    pub fn is_pit(&self) -> bool {
        self.kind == PropositionKind::Pit
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.symbol(), self.location)
    }
}
