//! Frontiers: the collection of discovered-but-unexpanded search nodes.
//!
//! [`QueueFrontier`] (FIFO) is what makes the search breadth-first and
//! therefore shortest-path on an unweighted graph. [`StackFrontier`] (LIFO)
//! turns the same loop into a depth-first walk that still finds *a* path.
//!
//! Neither frontier dedupes on insert. Callers check
//! [`Frontier::contains_state`] first.

use std::collections::{HashMap, VecDeque};

use costar_kernel::dataset::PersonId;

use crate::error::SearchError;
use crate::node::{NodeId, SearchNode};

/// Expansion queue contract.
pub trait Frontier {
    /// Queue a node.
    fn add(&mut self, node: &SearchNode);

    /// Take the next node according to this frontier's discipline.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if nothing is queued.
    fn remove(&mut self) -> Result<NodeId, SearchError>;

    /// Whether any queued node has this state.
    fn contains_state(&self, state: &PersonId) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Largest number of nodes ever queued at once.
    fn high_water(&self) -> u64;
}

/// Multiset of queued states plus the high-water mark, shared by both frontiers.
#[derive(Debug, Default)]
struct QueuedStates {
    counts: HashMap<PersonId, usize>,
    high_water: u64,
}

impl QueuedStates {
    fn added(&mut self, state: &PersonId, len: usize) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
        let len = len as u64;
        if len > self.high_water {
            self.high_water = len;
        }
    }

    fn removed(&mut self, state: &PersonId) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.counts.contains_key(state)
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<(NodeId, PersonId)>,
    states: QueuedStates,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: &SearchNode) {
        self.queue.push_back((node.node_id, node.state.clone()));
        self.states.added(&node.state, self.queue.len());
    }

    fn remove(&mut self) -> Result<NodeId, SearchError> {
        let (node_id, state) = self.queue.pop_front().ok_or(SearchError::EmptyFrontier)?;
        self.states.removed(&state);
        Ok(node_id)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.states.high_water
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<(NodeId, PersonId)>,
    states: QueuedStates,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: &SearchNode) {
        self.stack.push((node.node_id, node.state.clone()));
        self.states.added(&node.state, self.stack.len());
    }

    fn remove(&mut self) -> Result<NodeId, SearchError> {
        let (node_id, state) = self.stack.pop().ok_or(SearchError::EmptyFrontier)?;
        self.states.removed(&state);
        Ok(node_id)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.states.high_water
    }
}
