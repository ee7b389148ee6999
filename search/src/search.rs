//! Search entry point and expansion loop.

use std::collections::HashSet;

use costar_kernel::dataset::PersonId;

use crate::contract::CostarGraph;
use crate::error::SearchError;
use crate::frontier::{Frontier, QueueFrontier};
use crate::node::{NodeArena, NodeId};
use crate::path::PathStep;
use crate::policy::{SearchPolicy, TargetCheck};
use crate::report::{SearchReport, TerminationReason};

/// What the search concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Steps from source to target; empty when source == target.
    Found(Vec<PathStep>),
    /// The frontier emptied: no path exists.
    NotConnected,
    /// The expansion budget ran out first. Says nothing about connectivity.
    BudgetExceeded,
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub report: SearchReport,
}

impl SearchResult {
    /// Returns `true` if the search reached the target.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// The found path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[PathStep]> {
        match &self.outcome {
            SearchOutcome::Found(steps) => Some(steps),
            _ => None,
        }
    }

    /// Degrees of separation, if a path was found.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(<[PathStep]>::len)
    }
}

/// Find a shortest co-star path from `source` to `target` by breadth-first search.
///
/// # Errors
///
/// - [`SearchError::UnsupportedPolicyMode`] if the policy fails validation.
/// - [`SearchError::UnknownPerson`] if either endpoint is not in `graph`.
///
/// "No path" is not an error: it is [`SearchOutcome::NotConnected`].
pub fn shortest_path(
    graph: &dyn CostarGraph,
    source: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    search_with_frontier(graph, source, target, policy, QueueFrontier::new())
}

/// Run the search loop with a caller-chosen frontier.
///
/// With a [`QueueFrontier`] this is [`shortest_path`]. Any other discipline
/// still returns a valid path when one exists, but not necessarily a shortest.
///
/// # Errors
///
/// As [`shortest_path`]. [`SearchError::EmptyFrontier`] signals a frontier
/// that reported non-empty but had nothing to remove.
pub fn search_with_frontier<F: Frontier>(
    graph: &dyn CostarGraph,
    source: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
    mut frontier: F,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    for id in [source, target] {
        if !graph.contains_person(id) {
            return Err(SearchError::UnknownPerson { id: id.to_string() });
        }
    }

    let mut arena = NodeArena::new();
    let mut explored: HashSet<PersonId> = HashSet::new();
    let mut expansion_count: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;

    let root = arena.push_root(source.clone());
    frontier.add(arena.get(root));

    let mut goal: Option<NodeId> = None;
    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }

        let current_id = frontier.remove()?;
        let current_state = arena.get(current_id).state.clone();

        if current_state == *target {
            goal = Some(current_id);
            break TerminationReason::GoalReached {
                depth: arena.get(current_id).depth,
            };
        }

        if policy.max_expansions.is_some_and(|max| expansion_count >= max) {
            break TerminationReason::ExpansionBudgetExceeded;
        }
        expansion_count += 1;

        for neighbor in graph.neighbors(&current_state) {
            if neighbor.person_id == current_state {
                continue;
            }
            if policy.target_check == TargetCheck::OnDiscovery && neighbor.person_id == *target {
                goal = Some(arena.push_child(current_id, neighbor.person_id, neighbor.movie_id));
                break;
            }
            if frontier.contains_state(&neighbor.person_id)
                || explored.contains(&neighbor.person_id)
            {
                total_duplicates_suppressed += 1;
                continue;
            }
            let child = arena.push_child(current_id, neighbor.person_id, neighbor.movie_id);
            frontier.add(arena.get(child));
        }

        // Explored only once fully expanded.
        explored.insert(current_state);

        if let Some(found) = goal {
            break TerminationReason::GoalReached {
                depth: arena.get(found).depth,
            };
        }
    };

    let outcome = match (termination_reason, goal) {
        (TerminationReason::GoalReached { .. }, Some(found)) => {
            SearchOutcome::Found(reconstruct_path(&arena, found))
        }
        (TerminationReason::ExpansionBudgetExceeded, _) => SearchOutcome::BudgetExceeded,
        _ => SearchOutcome::NotConnected,
    };

    let report = SearchReport {
        source: source.clone(),
        target: target.clone(),
        policy: policy.clone(),
        termination_reason,
        total_expansions: expansion_count,
        total_nodes: arena.len() as u64,
        total_duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
    };

    tracing::debug!(
        source = %source,
        target = %target,
        reason = ?report.termination_reason,
        expansions = report.total_expansions,
        nodes = report.total_nodes,
        "search finished"
    );

    Ok(SearchResult { outcome, report })
}

/// Reconstruct the steps from the root to `goal`.
///
/// Walks parent links back to the root, then reverses so the steps run
/// source → target. The root contributes no step.
#[must_use]
pub fn reconstruct_path(arena: &NodeArena, goal: NodeId) -> Vec<PathStep> {
    let mut steps: Vec<PathStep> = arena
        .ancestors(goal)
        .filter_map(|node| {
            node.action.as_ref().map(|movie_id| PathStep {
                movie_id: movie_id.clone(),
                person_id: node.state.clone(),
            })
        })
        .collect();
    steps.reverse();
    steps
}
