//! Search nodes and the arena that owns them.
//!
//! Nodes link to their parent by [`NodeId`] rather than by reference, so the
//! whole tree is one `Vec` that is dropped when the search run ends.

use costar_kernel::dataset::{MovieId, PersonId};

/// Handle to a node inside a [`NodeArena`]. Assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub node_id: NodeId,
    /// Parent node (`None` for root).
    pub parent_id: Option<NodeId>,
    /// The person this node stands for.
    pub state: PersonId,
    /// Movie linking this person to the parent (`None` for root).
    pub action: Option<MovieId>,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// Append-only store of search nodes.
///
/// Invariant: a node's parent always has a smaller `NodeId` and a depth one
/// less than the node, so every parent chain is acyclic and ends at the root.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root node (no parent, no action, depth 0).
    pub fn push_root(&mut self, state: PersonId) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            node_id,
            parent_id: None,
            state,
            action: None,
            depth: 0,
        });
        node_id
    }

    /// Create a child of `parent` reached through `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not created by this arena.
    pub fn push_child(&mut self, parent: NodeId, state: PersonId, action: MovieId) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent),
            state,
            action: Some(action),
            depth,
        });
        node_id
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Walk from `id` up to the root, yielding `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(self.get(id)), |n| n.parent_id.map(|p| self.get(p)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
