//! `SearchReport`: what one search run did and why it stopped.
//!
//! The report is deterministic: the same graph, endpoints and policy always
//! produce the same canonical bytes.

use costar_kernel::dataset::PersonId;
use costar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use costar_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};

use crate::policy::SearchPolicy;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The target was reached at this depth.
    GoalReached { depth: u32 },
    /// The frontier emptied without reaching the target.
    FrontierExhausted,
    /// `max_expansions` was hit before the target was reached.
    ExpansionBudgetExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub source: PersonId,
    pub target: PersonId,
    pub policy: SearchPolicy,
    pub termination_reason: TerminationReason,
    /// Nodes whose neighbors were enumerated.
    pub total_expansions: u64,
    /// Nodes created, root included.
    pub total_nodes: u64,
    /// Co-stars skipped because they were already queued or explored.
    pub total_duplicates_suppressed: u64,
    pub frontier_high_water: u64,
}

impl SearchReport {
    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "policy": self.policy.to_json_value(),
            "source": self.source.as_str(),
            "target": self.target.as_str(),
            "termination_reason": termination_reason_to_json(self.termination_reason),
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_nodes": self.total_nodes,
        })
    }
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { depth } => {
            serde_json::json!({"depth": depth, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
    }
}
