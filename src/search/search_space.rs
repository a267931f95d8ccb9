use crate::search::{Cost, NodeId, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during one search run. Nodes
/// refer to their parents by [`NodeId`], so reconstructing a path is a matter
/// of chasing ids back to the root.
#[derive(Debug)]
pub struct SearchSpace<S> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S>, Linear>,
}

impl<S> SearchSpace<S> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
        }
    }

    /// Allocate a new node for `state`. The space does not deduplicate
    /// states, that is the job of the open and closed lists.
    pub fn add_node(&mut self, state: S, g: Cost, parent_id: NodeId) -> NodeId {
        debug_assert!(
            parent_id == NO_NODE || parent_id.id() < self.nodes.len(),
            "Parent must already be in the search space"
        );
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_with_parent(node_id, state, g, parent_id));
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    /// Walk from `node_id` up to the root, yielding `node_id` first.
    pub fn ancestors(&self, node_id: NodeId) -> impl Iterator<Item = &SearchNode<S>> + '_ {
        let mut current = Some(self.get_node(node_id));
        std::iter::from_fn(move || {
            let node = current?;
            current = match node.get_parent_id() {
                NO_NODE => None,
                parent_id => Some(self.get_node(parent_id)),
            };
            Some(node)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S: Clone> SearchSpace<S> {
    /// The states on the path from the root to `node_id`, root first.
    pub fn extract_path(&self, node_id: NodeId) -> Vec<S> {
        let mut path: Vec<S> = self
            .ancestors(node_id)
            .map(|node| node.get_state().clone())
            .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_zero_cost_and_no_parent() {
        let space = SearchSpace::new('a');
        let root = space.get_root_node();
        assert_eq!(root.get_g(), Cost::from(0.));
        assert!(root.is_root());
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn extract_path_follows_parent_ids() {
        let mut space = SearchSpace::new('a');
        let root_id = space.get_root_node().get_node_id();
        let b = space.add_node('b', Cost::from(1.), root_id);
        let _unrelated = space.add_node('x', Cost::from(7.), root_id);
        let c = space.add_node('c', Cost::from(3.), b);

        assert_eq!(space.extract_path(c), vec!['a', 'b', 'c']);
        assert_eq!(space.extract_path(root_id), vec!['a']);
    }

    #[test]
    fn updated_parent_changes_path() {
        let mut space = SearchSpace::new('a');
        let root_id = space.get_root_node().get_node_id();
        let b = space.add_node('b', Cost::from(1.), root_id);
        let c = space.add_node('c', Cost::from(5.), root_id);
        space.get_node_mut(c).update(Cost::from(2.), b);

        assert_eq!(space.extract_path(c), vec!['a', 'b', 'c']);
        assert_eq!(space.get_node(c).get_g(), Cost::from(2.));
    }
}
