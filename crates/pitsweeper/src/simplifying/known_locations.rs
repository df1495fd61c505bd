//! Clause-set simplification from confirmed tile states.
//!
//! Once a location is known to be a pit (or known to be safe), every
//! non-unit clause mentioning it can be settled:
//!
//! - a clause holding the literal that agrees with the fact is satisfied and
//!   is dropped
//! - a clause holding the opposite literal is resolved against the unit fact,
//!   which removes exactly that literal
//! - unit clauses are kept as they are; they are the accumulated ground facts
//!
//! Without this pass the knowledge base keeps every clause about settled
//! tiles and each later query gets slower.

use crate::error::{KnowledgeError, Result};
use crate::logic::{Clause, Literal, Location, Proposition};
use indexmap::IndexSet;
use std::collections::BTreeMap;
use tracing::debug;

/// Simplify `clauses` with every known pit and every known safe location.
///
/// Locations are applied one at a time in sorted order, each pass working on
/// the output of the previous one. A location listed as both pit and safe is
/// a caller error.
pub fn simplify_from_known_locations<'a, P, S>(
    clauses: &IndexSet<Clause>,
    known_pits: P,
    known_safe: S,
) -> Result<IndexSet<Clause>>
where
    P: IntoIterator<Item = &'a Location>,
    S: IntoIterator<Item = &'a Location>,
{
    let mut facts: BTreeMap<Location, bool> =
        known_pits.into_iter().map(|loc| (*loc, true)).collect();
    for location in known_safe {
        if facts.insert(*location, false) == Some(true) {
            return Err(KnowledgeError::ConflictingFacts {
                location: *location,
            });
        }
    }

    let before = clauses.len();
    let simplified = facts
        .iter()
        .fold(clauses.clone(), |current, (location, is_pit)| {
            get_simplified_clauses(&current, *location, *is_pit)
        });

    debug!(
        locations = facts.len(),
        before,
        after = simplified.len(),
        "simplified clause set from known locations"
    );
    Ok(simplified)
}

/// Simplify `clauses` given that `location` is (or is not) a pit.
///
/// Returns a new set; the input is left untouched.
pub fn get_simplified_clauses(
    clauses: &IndexSet<Clause>,
    location: Location,
    is_pit: bool,
) -> IndexSet<Clause> {
    let fact = Clause::unit(Proposition::pit(location), is_pit);
    let agreeing = Literal::pit(location, is_pit);
    let opposing = agreeing.complement();

    let mut result = IndexSet::with_capacity(clauses.len());
    for clause in clauses {
        if clause.is_unit() {
            result.insert(clause.clone());
        } else if clause.contains(&agreeing) {
            // Satisfied by the fact
            continue;
        } else if clause.contains(&opposing) {
            result.extend(Clause::resolve(clause, &fact));
        } else {
            result.insert(clause.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn loc(col: i32, row: i32) -> Location {
        Location::new(col, row)
    }

    fn p(col: i32, row: i32) -> Proposition {
        Proposition::pit(loc(col, row))
    }

    fn set(clauses: Vec<Clause>) -> IndexSet<Clause> {
        clauses.into_iter().collect()
    }

    #[test]
    fn test_known_pit_drops_satisfied_and_shrinks_opposed() {
        // KB = {(P(1,1) v ~P(2,1)) ^ (~P(1,1) v P(1,2))}, pit at (1,1)
        let clauses = set(vec![
            Clause::new([(p(1, 1), true), (p(2, 1), false)]),
            Clause::new([(p(1, 1), false), (p(1, 2), true)]),
        ]);
        let simplified = get_simplified_clauses(&clauses, loc(1, 1), true);
        assert_eq!(simplified.len(), 1);
        assert!(simplified.contains(&Clause::unit(p(1, 2), true)));
    }

    #[test]
    fn test_units_are_kept() {
        let clauses = set(vec![
            Clause::unit(p(1, 1), true),
            Clause::unit(p(1, 1), false),
        ]);
        let simplified = get_simplified_clauses(&clauses, loc(1, 1), true);
        assert_eq!(simplified, clauses);
    }

    #[test]
    fn test_unrelated_clauses_pass_through() {
        let clauses = set(vec![Clause::new([(p(4, 4), true), (p(4, 5), false)])]);
        let simplified = get_simplified_clauses(&clauses, loc(0, 0), false);
        assert_eq!(simplified, clauses);
    }

    #[test]
    fn test_warning_propositions_are_untouched() {
        let w = Proposition::warning(2, loc(1, 1));
        let clauses = set(vec![Clause::new([(w, true), (p(1, 1), false)])]);
        // Only the pit proposition at (1,1) is settled
        let simplified = get_simplified_clauses(&clauses, loc(1, 1), true);
        assert_eq!(simplified, set(vec![Clause::unit(w, true)]));
    }

    #[test]
    fn test_fold_over_locations() {
        let clauses = set(vec![
            Clause::unit(p(0, 0), false),
            Clause::new([(p(0, 1), true), (p(1, 0), true), (p(2, 2), true)]),
        ]);
        let safe: BTreeSet<Location> = [loc(0, 0), loc(1, 0), loc(2, 2)].into_iter().collect();
        let no_pits = BTreeSet::<Location>::new();
        let simplified = simplify_from_known_locations(&clauses, &no_pits, &safe).unwrap();
        assert_eq!(
            simplified,
            set(vec![Clause::unit(p(0, 0), false), Clause::unit(p(0, 1), true)])
        );
    }

    #[test]
    fn test_conflicting_facts_rejected() {
        let clauses = IndexSet::new();
        let result = simplify_from_known_locations(&clauses, &[loc(3, 3)], &[loc(3, 3)]);
        assert!(matches!(
            result,
            Err(KnowledgeError::ConflictingFacts { location }) if location == loc(3, 3)
        ));
    }

    #[test]
    fn test_simplification_is_idempotent() {
        let clauses = set(vec![
            Clause::unit(p(0, 0), true),
            Clause::new([(p(0, 0), false), (p(0, 1), true), (p(0, 2), true)]),
            Clause::new([(p(0, 0), true), (p(0, 3), false)]),
            Clause::new([(p(0, 2), false), (p(5, 5), true)]),
        ]);
        let pits = [loc(0, 0)];
        let safe = [loc(0, 2)];
        let once = simplify_from_known_locations(&clauses, &pits, &safe).unwrap();
        let twice = simplify_from_known_locations(&once, &pits, &safe).unwrap();
        assert_eq!(once, twice);
        // (0,2) being safe satisfies ~P(0,2) v P(5,5)
        assert_eq!(
            once,
            set(vec![Clause::unit(p(0, 0), true), Clause::unit(p(0, 1), true)])
        );
    }
}
