//! Integration tests for tell/ask/simplify on hand-built scenarios

use pitsweeper::{
    get_simplified_clauses, parse_clause, parse_clauses, resolve, simplify_from_known_locations,
    Clause, KnowledgeBase, Location, Proposition, QueryConfig, QueryOutcome,
};
use indexmap::IndexSet;
use std::collections::BTreeSet;

fn pit(col: i32, row: i32) -> Clause {
    Clause::unit(Proposition::pit(Location::new(col, row)), true)
}

fn safe(col: i32, row: i32) -> Clause {
    Clause::unit(Proposition::pit(Location::new(col, row)), false)
}

#[test]
fn test_complementary_units_resolve_to_empty_clause() {
    let results = resolve(&pit(0, 0), &safe(0, 0));
    assert_eq!(results.len(), 1);
    assert!(results.iter().next().unwrap().is_empty());

    let mut kb = KnowledgeBase::new();
    kb.tell(pit(0, 0));
    kb.tell(safe(0, 0));
    for query in [pit(3, 3), safe(3, 3), parse_clause("P(1,1) | ~P(2,2)").unwrap()] {
        assert!(kb.ask(&query), "inconsistent KB should entail {}", query);
    }
}

#[test]
fn test_two_complementary_propositions_give_two_resolvents() {
    let a = parse_clause("P(0,0) | P(0,1)").unwrap();
    let b = parse_clause("~P(0,0) | ~P(0,1)").unwrap();
    let results = resolve(&a, &b);
    assert_eq!(results.len(), 2);
    assert!(results.contains(&parse_clause("P(0,1) | ~P(0,1)").unwrap()));
    assert!(results.contains(&parse_clause("P(0,0) | ~P(0,0)").unwrap()));
}

#[test]
fn test_one_of_two_neighbors_scenario() {
    let a = Location::new(1, 1);
    let a1 = Location::new(2, 1);
    let a2 = Location::new(1, 2);

    let mut kb = KnowledgeBase::new();
    kb.tell(safe(1, 1));
    kb.tell(Clause::new([
        (Proposition::pit(a1), true),
        (Proposition::pit(a2), true),
    ]));
    // Could be either neighbour
    assert!(!kb.ask(&pit(2, 1)));

    kb.tell(safe(1, 2));
    let known_safe: BTreeSet<Location> = [a, a2].into_iter().collect();
    kb.simplify(&BTreeSet::<Location>::new(), &known_safe).unwrap();

    assert!(kb.contains(&pit(2, 1)));
    assert!(kb.ask(&pit(2, 1)));
    assert!(!kb.ask(&safe(2, 1)));
}

#[test]
fn test_four_of_four_clue() {
    let centre = Location::new(5, 5);
    let mut kb = KnowledgeBase::new();
    for n in centre.cardinal_neighbors() {
        kb.tell(Clause::unit(Proposition::pit(n), true));
    }
    for n in centre.cardinal_neighbors() {
        assert!(kb.ask(&Clause::unit(Proposition::pit(n), true)));
        assert!(!kb.ask(&Clause::unit(Proposition::pit(n), false)));
    }
}

#[test]
fn test_unit_propagation_round_trip() {
    let clauses: IndexSet<Clause> = parse_clauses(
        "
        P(0,0)
        P(0,0) | P(1,0)
        P(0,0) | ~P(2,0) | P(3,0)
        ~P(0,0) | P(1,1)
        ~P(0,0) | P(1,2) | ~P(1,3)
        P(4,4) | P(4,5)
        ",
    )
    .unwrap()
    .into_iter()
    .collect();

    let simplified = get_simplified_clauses(&clauses, Location::new(0, 0), true);
    let expected: IndexSet<Clause> = parse_clauses(
        "
        P(0,0)
        P(1,1)
        P(1,2) | ~P(1,3)
        P(4,4) | P(4,5)
        ",
    )
    .unwrap()
    .into_iter()
    .collect();
    assert_eq!(simplified, expected);

    let no_safe: [Location; 0] = [];
    let via_sets =
        simplify_from_known_locations(&clauses, &[Location::new(0, 0)], &no_safe).unwrap();
    assert_eq!(via_sets, simplified);
}

#[test]
fn test_simplification_twice_changes_nothing() {
    let mut kb = KnowledgeBase::new();
    kb.tell_all(
        parse_clauses(
            "
            ~P(0,0)
            P(0,0) | P(0,1) | P(1,0)
            ~P(0,1) | ~P(1,0)
            P(1,0) | P(2,0)
            ",
        )
        .unwrap(),
    );
    let pits = [Location::new(1, 0)];
    let safe = [Location::new(0, 0)];

    kb.simplify(&pits, &safe).unwrap();
    let once = kb.clauses().clone();
    kb.simplify(&pits, &safe).unwrap();
    assert_eq!(kb.clauses(), &once);
}

#[test]
fn test_ask_leaves_kb_untouched() {
    let mut kb = KnowledgeBase::new();
    kb.tell_all(parse_clauses("P(0,0) | P(0,1)\n~P(0,1) | P(0,2)\n~P(0,2)").unwrap());
    let before: Vec<Clause> = kb.clauses().iter().cloned().collect();
    let len = kb.len();

    assert!(kb.ask(&pit(0, 0)));
    assert!(!kb.ask(&pit(0, 1)));
    assert_eq!(kb.len(), len);
    assert_eq!(kb.clauses().iter().cloned().collect::<Vec<_>>(), before);
}

#[test]
fn test_bounded_query_reports_unknown_not_false() {
    // A three-step chain: needs three rounds to refute
    let mut kb = KnowledgeBase::with_config(QueryConfig::default().with_max_rounds(1));
    kb.tell_all(
        parse_clauses(
            "
            P(0,0) | P(0,1) | P(0,2)
            ~P(0,1) | P(1,1)
            ~P(1,1) | P(2,1)
            ~P(2,1)
            ~P(0,2) | P(1,2)
            ~P(1,2)
            ",
        )
        .unwrap(),
    );

    let outcome = kb.entails(&pit(0, 0));
    assert!(matches!(outcome, QueryOutcome::ResourceLimit(_)));
    assert!(outcome.is_inconclusive());

    kb.set_config(QueryConfig::default());
    let outcome = kb.entails(&pit(0, 0));
    assert!(outcome.is_proven());
    let proof = outcome.proof().unwrap();
    assert_eq!(proof.input_clauses().len(), 6);
}
