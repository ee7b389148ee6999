//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256. Every prefix is null-terminated so no domain is a
//! prefix of another.

use sha2::{Digest, Sha256};

/// A domain-separated SHA-256 digest, rendered `"sha256:<hex>"`.
///
/// Only [`canonical_hash`] builds one, so the prefix and 64 lowercase hex
/// digits are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for the loaded dataset digest.
pub const DOMAIN_DATASET: &[u8] = b"COSTAR::DATASET::V1\0";

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"COSTAR::SEARCH_REPORT::V1\0";

/// Domain prefix for search policy digests.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"COSTAR::SEARCH_POLICY::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Hash = `sha256(domain || data)`, rendered as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash(format!("sha256:{}", hex::encode(digest)))
}
