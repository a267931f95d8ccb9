use crate::search::Cost;

/// Handle of a [`SearchNode`] inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a vertex of the search tree. It contains the state it
/// was generated for, the cost of the path that reached it and the id of the
/// node it was generated from.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Unique identifier of the node within its search space
    node_id: NodeId,
    /// State this node was generated for
    state: S,
    /// G-value of the node, i.e. the cost to reach this node from the root
    g: Cost,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
}

impl<S> SearchNode<S> {
    /// Create the root node of a search space. The root always has a g-value
    /// of zero.
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            g: Cost::from(0.),
            parent_id: NO_NODE,
        }
    }

    /// Create a node generated from `parent_id`. `g` must be the parent's
    /// g-value plus the cost of the edge between the two.
    pub fn new_with_parent(node_id: NodeId, state: S, g: Cost, parent_id: NodeId) -> Self {
        debug_assert!(g >= Cost::from(0.), "Path costs must be non-negative");
        Self {
            node_id,
            state,
            g,
            parent_id,
        }
    }

    /// Record that a cheaper path to this node's state was found through
    /// `parent_id`.
    pub fn update(&mut self, g: Cost, parent_id: NodeId) {
        debug_assert!(g < self.g, "Updates must strictly improve the g-value");
        self.g = g;
        self.parent_id = parent_id;
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
