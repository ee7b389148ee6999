//! Search policy types.

use costar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use costar_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY};

use crate::error::SearchError;

/// Runtime configuration of one search.
///
/// Neither field can change which path a successful search returns under
/// [`TargetCheck::OnDequeue`]; `max_expansions` only bounds how long a search
/// may run before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// When a node is tested against the target.
    pub target_check: TargetCheck,
}

impl SearchPolicy {
    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicyMode`] if `max_expansions` is
    /// `Some(0)`, which could never expand even the source.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "target_check": self.target_check.as_str(),
        })
    }

    /// Content digest of this policy.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            target_check: TargetCheck::OnDequeue,
        }
    }
}

/// When the search compares a node's person with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCheck {
    /// Every co-star is queued; the target is recognised when it is removed
    /// from the frontier. FIFO order decides among equally short paths.
    OnDequeue,
    /// A co-star equal to the target ends the search as soon as it is seen
    /// during expansion, without being queued. Among several target-adjacent
    /// co-stars the first in neighbor order wins.
    OnDiscovery,
}

impl TargetCheck {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnDequeue => "on_dequeue",
            Self::OnDiscovery => "on_discovery",
        }
    }
}
