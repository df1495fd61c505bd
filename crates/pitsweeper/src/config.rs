//! Query configuration types.

use crate::error::{KnowledgeError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits and switches for the refutation loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Maximum resolution rounds per query
    pub max_rounds: usize,
    /// Maximum working-set size per query
    pub max_clauses: usize,
    /// Wall-clock limit per query
    pub timeout: Option<Duration>,
    /// Discard resolvents already subsumed by the working set
    pub forward_subsumption: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            max_rounds: 0,  // 0 means no limit
            max_clauses: 0, // 0 means no limit
            timeout: None,
            forward_subsumption: true,
        }
    }
}

impl QueryConfig {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = max_clauses;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_forward_subsumption(mut self, enabled: bool) -> Self {
        self.forward_subsumption = enabled;
        self
    }

    /// True when no limit can cut a query short
    pub fn is_unbounded(&self) -> bool {
        self.max_rounds == 0 && self.max_clauses == 0 && self.timeout.is_none()
    }

    /// Parse options from JSON and apply them on top of the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: QueryOptions = serde_json::from_str(json)?;
        options.into_config()
    }
}

/// Externally supplied query options; absent fields keep their defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryOptions {
    pub max_rounds: Option<usize>,
    pub max_clauses: Option<usize>,
    pub timeout_ms: Option<u64>,
    pub forward_subsumption: Option<bool>,
}

impl QueryOptions {
    pub fn into_config(self) -> Result<QueryConfig> {
        let mut config = QueryConfig::default();
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        if let Some(max_clauses) = self.max_clauses {
            config.max_clauses = max_clauses;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            if timeout_ms == 0 {
                return Err(KnowledgeError::Config(
                    "timeout_ms must be positive; omit it for no timeout".into(),
                ));
            }
            config.timeout = Some(Duration::from_millis(timeout_ms));
        }
        if let Some(enabled) = self.forward_subsumption {
            config.forward_subsumption = enabled;
        }
        Ok(config)
    }
}
