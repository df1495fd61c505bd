//! Core state types for refutation queries.
//!
//! This module consolidates derivation tracking, proof representation and the
//! outcome of an entailment query.

use crate::json::{ProofJson, QueryOutcomeJson};
use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

// =============================================================================
// Derivation
// =============================================================================

/// How a clause entered the working set of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// Name of the rule that produced this clause
    pub rule_name: String,
    /// Working-set indices of the premise clauses
    pub premises: Vec<usize>,
}

impl Derivation {
    /// A clause stored in the knowledge base
    pub fn input() -> Self {
        Derivation {
            rule_name: "Input".into(),
            premises: vec![],
        }
    }

    /// A unit clause from the negated query
    pub fn negated_query() -> Self {
        Derivation {
            rule_name: "NegatedQuery".into(),
            premises: vec![],
        }
    }
}

// =============================================================================
// InferenceResult
// =============================================================================

/// Result of an inference rule application
#[derive(Debug, Clone)]
pub struct InferenceResult {
    pub derivation: Derivation,
    pub conclusion: Clause,
}

// =============================================================================
// Proof
// =============================================================================

/// A single step in a proof derivation. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub clause_idx: usize,
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// A refutation: the steps the empty clause depends on, in index order
#[derive(Debug, Clone)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_idx: usize,
}

impl Proof {
    /// Build a proof by walking premises back from the empty clause.
    ///
    /// `clauses` and `derivations` are parallel, indexed by working-set index.
    pub fn extract(
        clauses: &[Clause],
        derivations: &[Derivation],
        empty_clause_idx: usize,
    ) -> Self {
        let mut needed = BTreeSet::new();
        let mut to_visit = vec![empty_clause_idx];

        while let Some(idx) = to_visit.pop() {
            if !needed.insert(idx) {
                continue;
            }
            if let Some(derivation) = derivations.get(idx) {
                to_visit.extend(derivation.premises.iter().copied());
            }
        }

        // Premises always have lower indices, so index order is topological
        let steps = needed
            .into_iter()
            .filter_map(|idx| {
                Some(ProofStep {
                    clause_idx: idx,
                    derivation: derivations.get(idx)?.clone(),
                    conclusion: clauses.get(idx)?.clone(),
                })
            })
            .collect();

        Proof {
            steps,
            empty_clause_idx,
        }
    }

    /// Knowledge-base clauses the refutation used
    pub fn input_clauses(&self) -> Vec<&Clause> {
        self.steps
            .iter()
            .filter(|s| s.derivation.rule_name == "Input")
            .map(|s| &s.conclusion)
            .collect()
    }

    /// Count of steps per rule name
    pub fn rule_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for step in &self.steps {
            *counts.entry(step.derivation.rule_name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> ProofJson {
        self.into()
    }
}

// =============================================================================
// QueryOutcome
// =============================================================================

/// Counters collected while answering one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Resolution rounds completed
    pub rounds: usize,
    /// Resolvents produced, before deduplication
    pub clauses_generated: usize,
    /// Size of the working set when the loop stopped
    pub final_clauses: usize,
    pub elapsed: Duration,
}

/// Result of an entailment query.
///
/// Only `Proof` means the query is entailed. The other variants mean "not
/// proven"; `ResourceLimit` and `Timeout` additionally mean the search was cut
/// short, so the answer is unknown rather than refuted.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// Empty clause derived from KB ∧ ¬query
    Proof(Proof, QueryStats),
    /// Fixed point reached without a contradiction
    Saturated(QueryStats),
    /// Round or clause limit reached
    ResourceLimit(QueryStats),
    /// Timeout reached
    Timeout(QueryStats),
}

impl QueryOutcome {
    pub fn is_proven(&self) -> bool {
        matches!(self, QueryOutcome::Proof(..))
    }

    /// True when the search stopped on a limit instead of finishing
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, QueryOutcome::ResourceLimit(_) | QueryOutcome::Timeout(_))
    }

    pub fn proof(&self) -> Option<&Proof> {
        match self {
            QueryOutcome::Proof(proof, _) => Some(proof),
            _ => None,
        }
    }

    pub fn stats(&self) -> &QueryStats {
        match self {
            QueryOutcome::Proof(_, stats)
            | QueryOutcome::Saturated(stats)
            | QueryOutcome::ResourceLimit(stats)
            | QueryOutcome::Timeout(stats) => stats,
        }
    }

    /// Short status label used in logs and JSON
    pub fn status(&self) -> &'static str {
        match self {
            QueryOutcome::Proof(..) => "proof_found",
            QueryOutcome::Saturated(_) => "saturated",
            QueryOutcome::ResourceLimit(_) => "resource_limit",
            QueryOutcome::Timeout(_) => "timeout",
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> QueryOutcomeJson {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Location, Proposition};

    #[test]
    fn test_derivation_input() {
        let input = Derivation::input();
        assert_eq!(input.rule_name, "Input");
        assert!(input.premises.is_empty());
    }

    #[test]
    fn test_extract_keeps_only_ancestors() {
        let a = Proposition::pit(Location::new(0, 0));
        let b = Proposition::pit(Location::new(1, 0));
        let clauses = vec![
            Clause::new([(a, true), (b, true)]), // 0
            Clause::unit(b, false),              // 1
            Clause::unit(Proposition::pit(Location::new(9, 9)), true), // 2 (unused)
            Clause::unit(a, false),              // 3
            Clause::unit(a, true),               // 4 = 0 + 1
            Clause::empty(),                     // 5 = 3 + 4
        ];
        let derivations = vec![
            Derivation::input(),
            Derivation::input(),
            Derivation::input(),
            Derivation::negated_query(),
            Derivation {
                rule_name: "Resolution".into(),
                premises: vec![0, 1],
            },
            Derivation {
                rule_name: "Resolution".into(),
                premises: vec![3, 4],
            },
        ];

        let proof = Proof::extract(&clauses, &derivations, 5);
        let indices: Vec<usize> = proof.steps.iter().map(|s| s.clause_idx).collect();
        assert_eq!(indices, vec![0, 1, 3, 4, 5]);
        assert_eq!(proof.input_clauses().len(), 2);
        assert_eq!(proof.rule_counts()["Resolution"], 2);
        assert!(proof.steps.last().unwrap().conclusion.is_empty());
    }
}
