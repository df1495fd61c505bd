//! CNF knowledge base with refutation queries.
//!
//! The knowledge base is a set of clauses read as their conjunction. Facts
//! come in through [`KnowledgeBase::tell`]; entailment is decided by
//! [`KnowledgeBase::ask`], which adds the negated query to a scratch copy of
//! the clause set and saturates it under resolution:
//!
//! 1. Seed the working set with every stored clause plus the unit clauses of
//!    ¬query.
//! 2. Each round resolves every pair that involves at least one clause added
//!    in the previous round (the first round covers all pairs). Older pairs
//!    were resolved in earlier rounds, so this is the same as re-resolving
//!    everything.
//! 3. Resolvents are merged after the round. The empty clause means
//!    KB ∧ ¬query is contradictory, so the query is entailed. A round that
//!    adds nothing new is a fixed point: the query is not entailed.
//!
//! The proposition space is finite, so the loop always terminates. Limits in
//! [`QueryConfig`] can stop it earlier; such outcomes are reported as
//! inconclusive and never as a proof.

use crate::config::QueryConfig;
use crate::error::Result;
use crate::generating::resolution_inferences;
use crate::json::KnowledgeBaseJson;
use crate::logic::{Clause, Location};
use crate::simplifying::{is_subsumed, remove_subsumed, simplify_from_known_locations};
use crate::state::{Derivation, Proof, QueryOutcome, QueryStats};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

/// A conjunction of clauses owned by one agent for one episode
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: IndexSet<Clause>,
    config: QueryConfig,
}

impl KnowledgeBase {
    /// Create an empty knowledge base with unbounded queries
    pub fn new() -> Self {
        KnowledgeBase::default()
    }

    pub fn with_config(config: QueryConfig) -> Self {
        KnowledgeBase {
            clauses: IndexSet::new(),
            config,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: QueryConfig) {
        self.config = config;
    }

    /// Add a clause. Returns `false` if it was already present.
    ///
    /// The clause is trusted: no consistency check is made. Telling
    /// contradictory clauses makes every later query succeed. Tautologies
    /// are always true and are not stored.
    pub fn tell(&mut self, clause: Clause) -> bool {
        if clause.is_tautology() {
            debug!(clause = %clause, "ignoring tautology");
            return false;
        }
        let added = self.clauses.insert(clause);
        if added {
            trace!(size = self.clauses.len(), "clause added");
        }
        added
    }

    /// Add several clauses, returning how many were new
    pub fn tell_all<I>(&mut self, clauses: I) -> usize
    where
        I: IntoIterator<Item = Clause>,
    {
        clauses.into_iter().map(|c| self.tell(c)).filter(|added| *added).count()
    }

    /// Does the knowledge base entail `query`?
    ///
    /// `false` means "not proven", not "proven false".
    pub fn ask(&self, query: &Clause) -> bool {
        self.entails(query).is_proven()
    }

    /// Run the refutation search for `query` and report how it ended.
    ///
    /// Works on a copy; the stored clauses are never modified.
    pub fn entails(&self, query: &Clause) -> QueryOutcome {
        let outcome = Refutation::new(&self.clauses, query, &self.config).run();
        let stats = outcome.stats();
        debug!(
            query = %query,
            status = outcome.status(),
            rounds = stats.rounds,
            generated = stats.clauses_generated,
            working = stats.final_clauses,
            "query finished"
        );
        outcome
    }

    /// Number of stored clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Alias of [`KnowledgeBase::len`]
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Stored clauses in insertion order
    pub fn clauses(&self) -> &IndexSet<Clause> {
        &self.clauses
    }

    /// Rewrite the stored clauses using confirmed pit and safe locations.
    ///
    /// Call after every batch of newly confirmed facts. On error the
    /// knowledge base is left unchanged.
    pub fn simplify<'a, P, S>(&mut self, known_pits: P, known_safe: S) -> Result<()>
    where
        P: IntoIterator<Item = &'a Location>,
        S: IntoIterator<Item = &'a Location>,
    {
        self.clauses = simplify_from_known_locations(&self.clauses, known_pits, known_safe)?;
        Ok(())
    }

    /// Drop clauses subsumed by shorter stored clauses. Returns how many went.
    pub fn remove_subsumed(&mut self) -> usize {
        let before = self.clauses.len();
        self.clauses = remove_subsumed(&self.clauses);
        before - self.clauses.len()
    }

    /// Diagnostic JSON dump of the stored clauses
    pub fn to_json(&self) -> KnowledgeBaseJson {
        self.into()
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Refutation loop
// =============================================================================

/// Scratch state for one query
struct Refutation<'a> {
    /// Working set, indexed by insertion order
    clauses: IndexSet<Clause>,
    /// Derivation of each working-set clause, parallel to `clauses`
    derivations: Vec<Derivation>,
    config: &'a QueryConfig,
    stats: QueryStats,
    start: Instant,
}

enum Stop {
    Proof(usize),
    Saturated,
    ResourceLimit,
    Timeout,
}

impl<'a> Refutation<'a> {
    fn new(kb: &IndexSet<Clause>, query: &Clause, config: &'a QueryConfig) -> Self {
        let mut refutation = Refutation {
            clauses: IndexSet::with_capacity(kb.len() + query.len()),
            derivations: Vec::with_capacity(kb.len() + query.len()),
            config,
            stats: QueryStats::default(),
            start: Instant::now(),
        };
        for clause in kb.iter().filter(|c| !c.is_tautology()) {
            refutation.push(clause.clone(), Derivation::input());
        }
        for unit in query.negate() {
            refutation.push(unit, Derivation::negated_query());
        }
        refutation
    }

    /// Insert a clause not yet in the working set
    fn push(&mut self, clause: Clause, derivation: Derivation) -> usize {
        let (idx, added) = self.clauses.insert_full(clause);
        if added {
            self.derivations.push(derivation);
        }
        idx
    }

    fn run(mut self) -> QueryOutcome {
        let stop = self.saturate();
        self.stats.final_clauses = self.clauses.len();
        self.stats.elapsed = self.start.elapsed();

        match stop {
            Stop::Proof(empty_clause_idx) => {
                let clauses: Vec<Clause> = self.clauses.into_iter().collect();
                let proof = Proof::extract(&clauses, &self.derivations, empty_clause_idx);
                QueryOutcome::Proof(proof, self.stats)
            }
            Stop::Saturated => QueryOutcome::Saturated(self.stats),
            Stop::ResourceLimit => QueryOutcome::ResourceLimit(self.stats),
            Stop::Timeout => QueryOutcome::Timeout(self.stats),
        }
    }

    fn timed_out(&self) -> bool {
        self.config
            .timeout
            .map_or(false, |limit| self.start.elapsed() >= limit)
    }

    fn saturate(&mut self) -> Stop {
        if let Some(idx) = self.clauses.get_index_of(&Clause::empty()) {
            return Stop::Proof(idx);
        }

        let mut frontier_start = 0;
        loop {
            if self.config.max_rounds > 0 && self.stats.rounds >= self.config.max_rounds {
                return Stop::ResourceLimit;
            }

            let end = self.clauses.len();
            // Merged only after the round completes
            let mut pending: IndexMap<Clause, Derivation> = IndexMap::new();

            for j in frontier_start..end {
                if self.timed_out() {
                    return Stop::Timeout;
                }
                for i in 0..j {
                    let inferences =
                        resolution_inferences(&self.clauses[i], i, &self.clauses[j], j);
                    for inference in inferences {
                        self.stats.clauses_generated += 1;
                        let conclusion = inference.conclusion;

                        if conclusion.is_empty() {
                            let idx = self.push(conclusion, inference.derivation);
                            return Stop::Proof(idx);
                        }
                        if self.clauses.contains(&conclusion) || pending.contains_key(&conclusion) {
                            continue;
                        }
                        if self.config.forward_subsumption
                            && is_subsumed(&conclusion, self.clauses.iter())
                        {
                            continue;
                        }
                        pending.insert(conclusion, inference.derivation);
                    }
                }
            }

            self.stats.rounds += 1;
            trace!(
                round = self.stats.rounds,
                working = end,
                new = pending.len(),
                "resolution round"
            );

            if pending.is_empty() {
                return Stop::Saturated;
            }

            frontier_start = end;
            for (clause, derivation) in pending {
                self.push(clause, derivation);
            }

            if self.config.max_clauses > 0 && self.clauses.len() > self.config.max_clauses {
                return Stop::ResourceLimit;
            }
        }
    }
}
