//! Clauses: immutable disjunctions of literals

use super::literal::Literal;
use super::proposition::Proposition;
use crate::error::{KnowledgeError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A clause (disjunction of literals).
///
/// Literals are kept in a sorted set, so equality and hashing depend only on
/// which literals are present. A clause never changes after construction;
/// every inference builds a new one.
///
/// - no literals: the constant False (the empty clause)
/// - one literal: a unit clause, a fact about one proposition
/// - a proposition with both polarities: a tautology (always true)
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Create a clause from `(proposition, polarity)` pairs, dropping duplicates
    pub fn new<I>(literals: I) -> Self
    where
        I: IntoIterator<Item = (Proposition, bool)>,
    {
        Clause::from_literals(literals.into_iter().map(Literal::from))
    }

    /// Create a clause from literals, dropping duplicates
    pub fn from_literals<I>(literals: I) -> Self
    where
        I: IntoIterator<Item = Literal>,
    {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// Like [`Clause::new`], but rejects tautologies
    pub fn try_new<I>(literals: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Proposition, bool)>,
    {
        let clause = Clause::new(literals);
        if clause.is_tautology() {
            return Err(KnowledgeError::Tautology(clause.to_string()));
        }
        Ok(clause)
    }

    /// The empty clause (False)
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A unit clause asserting `proposition` has the given truth value
    pub fn unit(proposition: Proposition, polarity: bool) -> Self {
        Clause::from_literals([Literal::new(proposition, polarity)])
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Alias of [`Clause::len`]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Check for complementary literals
    pub fn is_tautology(&self) -> bool {
        // Sorted by (proposition, polarity), so complements are adjacent
        let mut iter = self.literals.iter().peekable();
        while let Some(lit) = iter.next() {
            if let Some(next) = iter.peek() {
                if lit.is_complement_of(next) {
                    return true;
                }
            }
        }
        false
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Polarity of `proposition` in this clause, or `None` if it is absent.
    ///
    /// For a tautology the positive occurrence wins.
    pub fn get_polarity(&self, proposition: &Proposition) -> Option<bool> {
        if self.literals.contains(&Literal::positive(*proposition)) {
            Some(true)
        } else if self.literals.contains(&Literal::negative(*proposition)) {
            Some(false)
        } else {
            None
        }
    }

    /// Distinct propositions mentioned by this clause
    pub fn propositions(&self) -> BTreeSet<Proposition> {
        self.literals.iter().map(|lit| lit.proposition).collect()
    }

    /// `self` subsumes `other` when every literal of `self` appears in `other`
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.len() <= other.len() && self.literals.is_subset(&other.literals)
    }

    /// The negation of this clause as a conjunction of unit clauses.
    ///
    /// The empty clause negates to the empty conjunction (True).
    pub fn negate(&self) -> Vec<Clause> {
        self.literals
            .iter()
            .map(|lit| Clause::from_literals([lit.complement()]))
            .collect()
    }

    /// The clause without `literal`
    pub fn without(&self, literal: &Literal) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .filter(|lit| *lit != literal)
                .copied()
                .collect(),
        }
    }

    /// Resolvent of `self` and `other` on `literal`, if `self` holds it and
    /// `other` holds its complement.
    pub fn resolvent_on(&self, other: &Clause, literal: &Literal) -> Option<Clause> {
        let theirs = literal.complement();
        if !self.contains(literal) || !other.contains(&theirs) {
            return None;
        }
        let literals = self
            .literals
            .iter()
            .filter(|lit| *lit != literal)
            .chain(other.literals.iter().filter(|lit| **lit != theirs))
            .copied()
            .collect();
        Some(Clause { literals })
    }

    /// All resolvents of `a` and `b`, one per complementary proposition.
    ///
    /// See [`crate::generating::resolution::resolve`].
    pub fn resolve(a: &Clause, b: &Clause) -> IndexSet<Clause> {
        crate::generating::resolution::resolve(a, b)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::from_literals(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "}}")
    }
}
