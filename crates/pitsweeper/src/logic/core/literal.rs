//! Literals: propositions with a polarity

use super::proposition::{Location, Proposition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal (positive or negated proposition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub proposition: Proposition,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    pub const fn new(proposition: Proposition, polarity: bool) -> Self {
        Literal {
            proposition,
            polarity,
        }
    }

    /// Create a new positive literal
    pub const fn positive(proposition: Proposition) -> Self {
        Literal::new(proposition, true)
    }

    /// Create a new negative literal
    pub const fn negative(proposition: Proposition) -> Self {
        Literal::new(proposition, false)
    }

    /// `P(location)` with the given polarity
    pub const fn pit(location: Location, is_pit: bool) -> Self {
        Literal::new(Proposition::pit(location), is_pit)
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            proposition: self.proposition,
            polarity: !self.polarity,
        }
    }

    /// Same proposition, opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.proposition == other.proposition && self.polarity != other.polarity
    }
}

impl From<(Proposition, bool)> for Literal {
    fn from((proposition, polarity): (Proposition, bool)) -> Self {
        Literal::new(proposition, polarity)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.proposition)
    }
}
