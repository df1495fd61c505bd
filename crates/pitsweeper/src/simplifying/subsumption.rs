//! Subsumption checking for redundancy elimination
//!
//! A clause C subsumes D when every literal of C appears in D. D then adds
//! nothing to a conjunction that already holds C, and discarding it keeps
//! refutation complete. For propositional clauses this is plain set
//! inclusion, so no substitution search is needed.

use crate::logic::Clause;
use indexmap::IndexSet;

/// Is `candidate` subsumed by any clause in `clauses`?
pub fn is_subsumed<'a, I>(candidate: &Clause, clauses: I) -> bool
where
    I: IntoIterator<Item = &'a Clause>,
{
    clauses
        .into_iter()
        .any(|existing| existing.subsumes(candidate))
}

/// Drop every clause strictly subsumed by another clause of the set.
///
/// Order of the survivors is preserved.
pub fn remove_subsumed(clauses: &IndexSet<Clause>) -> IndexSet<Clause> {
    // Shorter clauses are the only possible subsumers
    let mut by_len: Vec<&Clause> = clauses.iter().collect();
    by_len.sort_by_key(|c| c.len());

    clauses
        .iter()
        .filter(|clause| {
            !by_len
                .iter()
                .take_while(|other| other.len() < clause.len())
                .any(|other| other.subsumes(clause))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Location, Proposition};

    fn p(col: i32, row: i32) -> Proposition {
        Proposition::pit(Location::new(col, row))
    }

    #[test]
    fn test_is_subsumed() {
        let unit = Clause::unit(p(0, 0), true);
        let wide = Clause::new([(p(0, 0), true), (p(1, 1), false)]);
        assert!(is_subsumed(&wide, [&unit]));
        assert!(!is_subsumed(&unit, [&wide]));
        assert!(is_subsumed(&unit, [&unit]));
        assert!(!is_subsumed(&unit, std::iter::empty()));
    }

    #[test]
    fn test_remove_subsumed() {
        let clauses: IndexSet<Clause> = [
            Clause::new([(p(0, 0), true), (p(1, 1), false)]),
            Clause::unit(p(0, 0), true),
            Clause::new([(p(2, 2), true), (p(3, 3), true)]),
            Clause::new([(p(0, 0), true), (p(2, 2), true), (p(3, 3), true)]),
        ]
        .into_iter()
        .collect();

        let kept = remove_subsumed(&clauses);
        let expected: IndexSet<Clause> = [
            Clause::unit(p(0, 0), true),
            Clause::new([(p(2, 2), true), (p(3, 3), true)]),
        ]
        .into_iter()
        .collect();
        assert_eq!(kept, expected);
        assert_eq!(kept[0], Clause::unit(p(0, 0), true));
    }
}
