//! Binary resolution inference rule

use crate::logic::Clause;
use crate::state::{Derivation, InferenceResult};
use indexmap::IndexSet;

/// All resolvents of two clauses.
///
/// One resolvent is produced for every literal of `clause1` whose complement
/// occurs in `clause2`, so every proposition with opposite polarities in the
/// two clauses is resolved on. Resolving on a single proposition
/// per pair would lose entailments, so every candidate is tried. Clauses with
/// no complementary proposition produce nothing.
///
/// A pair complementary on two propositions yields tautological resolvents;
/// they are returned here and filtered by the caller.
pub fn resolve(clause1: &Clause, clause2: &Clause) -> IndexSet<Clause> {
    let mut results = IndexSet::new();

    for lit in clause1.literals() {
        if clause2.contains(&lit.complement()) {
            if let Some(resolvent) = clause1.resolvent_on(clause2, lit) {
                results.insert(resolvent);
            }
        }
    }

    results
}

/// Resolve two clauses of a working set, recording premises.
///
/// Tautologies carry no information and are dropped.
pub fn resolution_inferences(
    clause1: &Clause,
    idx1: usize,
    clause2: &Clause,
    idx2: usize,
) -> Vec<InferenceResult> {
    resolve(clause1, clause2)
        .into_iter()
        .filter(|resolvent| !resolvent.is_tautology())
        .map(|conclusion| InferenceResult {
            derivation: Derivation {
                rule_name: "Resolution".into(),
                premises: vec![idx1, idx2],
            },
            conclusion,
        })
        .collect()
}
