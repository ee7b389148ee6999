//! Harness runner: one degrees query from endpoints to rendered output.
//!
//! The runner only orchestrates: the store answers lookups, `costar_search`
//! runs the search, and the kernel supplies canonical bytes and digests.
//!
//! # Pipeline
//!
//! ```text
//! store.digest() → policy.validate() → shortest_path()
//!   → format_path() → report.digest() → DegreesRun
//! ```

use costar_kernel::dataset::{DatasetStore, PersonId};
use costar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use costar_kernel::proof::hash::ContentHash;
use costar_search::error::SearchError;
use costar_search::path::{format_path, Connection};
use costar_search::policy::SearchPolicy;
use costar_search::search::{shortest_path, SearchOutcome, SearchResult};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The search refused to start or broke an internal contract.
    Search(SearchError),
    /// Canonical serialization of the dataset or report failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "canonical serialization failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Everything one query produced.
#[derive(Debug, Clone)]
pub struct DegreesRun {
    pub dataset_digest: ContentHash,
    pub result: SearchResult,
    /// Named hops; empty unless the outcome is `Found`.
    pub connections: Vec<Connection>,
    pub report_digest: ContentHash,
}

impl DegreesRun {
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.result.degrees()
    }
}

/// Run a single source → target query against `store`.
///
/// # Errors
///
/// Returns [`RunError::Search`] for invalid policies or unknown endpoints,
/// and [`RunError::Canon`] if a digest cannot be computed.
pub fn run_degrees(
    store: &DatasetStore,
    source: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
) -> Result<DegreesRun, RunError> {
    let dataset_digest = store.digest()?;
    let result = shortest_path(store, source, target, policy)?;

    let connections = match result.path() {
        Some(steps) => format_path(store, source, steps)?,
        None => Vec::new(),
    };
    let report_digest = result.report.digest()?;

    tracing::info!(
        source = source.as_str(),
        target = target.as_str(),
        degrees = result.degrees(),
        expansions = result.report.total_expansions,
        report_digest = report_digest.as_str(),
        "degrees query finished"
    );

    Ok(DegreesRun {
        dataset_digest,
        result,
        connections,
        report_digest,
    })
}

/// Plain-text rendering, one line per entry, no trailing newline.
#[must_use]
pub fn render_text(run: &DegreesRun) -> String {
    match &run.result.outcome {
        SearchOutcome::NotConnected => "Not connected.".to_string(),
        SearchOutcome::BudgetExceeded => format!(
            "Search stopped after {} expansions without an answer.",
            run.result.report.total_expansions
        ),
        SearchOutcome::Found(_) => {
            let mut lines = vec![format!("{} degrees of separation.", run.connections.len())];
            for (i, c) in run.connections.iter().enumerate() {
                lines.push(format!(
                    "{}: {} and {} starred in {}",
                    i + 1,
                    c.person_a,
                    c.person_b,
                    c.movie_title
                ));
            }
            lines.join("\n")
        }
    }
}

/// Canonical JSON rendering of a run.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn render_json(run: &DegreesRun) -> Result<Vec<u8>, CanonError> {
    let outcome = match &run.result.outcome {
        SearchOutcome::Found(_) => "found",
        SearchOutcome::NotConnected => "not_connected",
        SearchOutcome::BudgetExceeded => "budget_exceeded",
    };
    let path: Vec<serde_json::Value> = run
        .result
        .path()
        .unwrap_or_default()
        .iter()
        .zip(&run.connections)
        .map(|(step, c)| {
            serde_json::json!({
                "movie_id": step.movie_id.as_str(),
                "movie_title": c.movie_title,
                "person_id": step.person_id.as_str(),
                "person_name": c.person_b,
            })
        })
        .collect();

    let value = serde_json::json!({
        "dataset_digest": run.dataset_digest.as_str(),
        "degrees": run.degrees(),
        "outcome": outcome,
        "path": path,
        "report": run.result.report.to_json_value(),
        "report_digest": run.report_digest.as_str(),
    });
    canonical_json_bytes(&value)
}
