//! JSON serialization types for diagnostics
//!
//! These are one-way views for logs and debugging tools. Nothing here is
//! read back: knowledge bases live for a single episode.

use crate::kb::KnowledgeBase;
use crate::logic::{Clause, Literal};
use crate::state::{Proof, ProofStep, QueryOutcome, QueryStats};
use serde::{Deserialize, Serialize};

/// JSON representation of a literal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralJson {
    pub proposition: String,
    pub polarity: bool,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            proposition: lit.proposition.to_string(),
            polarity: lit.polarity,
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseJson {
    pub literals: Vec<LiteralJson>,
    /// Human-readable form, e.g. `{P(0,0) | ~P(0,1)}`
    pub text: String,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            literals: clause.literals().map(LiteralJson::from).collect(),
            text: clause.to_string(),
        }
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub clause_idx: usize,
    pub rule: String,
    pub premises: Vec<usize>,
    pub clause: ClauseJson,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            clause_idx: step.clause_idx,
            rule: step.derivation.rule_name.clone(),
            premises: step.derivation.premises.clone(),
            clause: (&step.conclusion).into(),
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub steps: Vec<ProofStepJson>,
    pub empty_clause_idx: usize,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        ProofJson {
            steps: proof.steps.iter().map(ProofStepJson::from).collect(),
            empty_clause_idx: proof.empty_clause_idx,
        }
    }
}

/// JSON representation of query counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryStatsJson {
    pub rounds: usize,
    pub clauses_generated: usize,
    pub final_clauses: usize,
    pub time_seconds: f64,
}

impl From<&QueryStats> for QueryStatsJson {
    fn from(stats: &QueryStats) -> Self {
        QueryStatsJson {
            rounds: stats.rounds,
            clauses_generated: stats.clauses_generated,
            final_clauses: stats.final_clauses,
            time_seconds: stats.elapsed.as_secs_f64(),
        }
    }
}

/// JSON representation of a query outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcomeJson {
    pub status: String,
    pub entailed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<ProofJson>,
    pub statistics: QueryStatsJson,
}

impl From<&QueryOutcome> for QueryOutcomeJson {
    fn from(outcome: &QueryOutcome) -> Self {
        QueryOutcomeJson {
            status: outcome.status().to_string(),
            entailed: outcome.is_proven(),
            proof: outcome.proof().map(ProofJson::from),
            statistics: outcome.stats().into(),
        }
    }
}

/// JSON representation of a knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseJson {
    pub clauses: Vec<ClauseJson>,
}

impl From<&KnowledgeBase> for KnowledgeBaseJson {
    fn from(kb: &KnowledgeBase) -> Self {
        KnowledgeBaseJson {
            clauses: kb.clauses().iter().map(ClauseJson::from).collect(),
        }
    }
}
