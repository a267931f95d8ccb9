use crate::search::{errors::NodeCollectionError, Cost, NodeId, SearchSpace};
use std::collections::HashMap;
use std::hash::Hash;

/// A set of nodes keyed by their state. At most one node is stored per
/// state. Used as the closed list of every search engine and as the lookup
/// index of the open lists.
#[derive(Debug, Clone)]
pub struct NodeCollection<S> {
    nodes: HashMap<S, NodeId>,
}

impl<S> Default for NodeCollection<S> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash> NodeCollection<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.nodes.contains_key(state)
    }

    /// Get the node stored for `state`.
    ///
    /// # Panics
    ///
    /// Panics if no node is stored for `state`. Callers inside the engines
    /// always check membership first, so a miss here is a bug.
    pub fn get(&self, state: &S) -> NodeId {
        *self
            .nodes
            .get(state)
            .expect("State must be in the collection before it is looked up")
    }

    pub fn try_get(&self, state: &S) -> Option<NodeId> {
        self.nodes.get(state).copied()
    }

    pub fn add(&mut self, state: S, node_id: NodeId) -> Result<(), NodeCollectionError> {
        if self.nodes.contains_key(&state) {
            return Err(NodeCollectionError::DuplicateState);
        }
        self.nodes.insert(state, node_id);
        Ok(())
    }

    pub fn remove(&mut self, state: &S) -> Option<NodeId> {
        self.nodes.remove(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, NodeId)> {
        self.nodes.iter().map(|(state, &node_id)| (state, node_id))
    }
}

/// The closed list of a search run that was asked to compute the distance to
/// every reachable state, together with the nodes it refers to. Every entry
/// holds the optimal cost from the initial state of that run.
#[derive(Debug)]
pub struct DistanceTable<S> {
    search_space: SearchSpace<S>,
    closed: NodeCollection<S>,
    complete: bool,
}

impl<S: Eq + Hash> DistanceTable<S> {
    pub(crate) fn new(
        search_space: SearchSpace<S>,
        closed: NodeCollection<S>,
        complete: bool,
    ) -> Self {
        Self {
            search_space,
            closed,
            complete,
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.closed.contains(state)
    }

    pub fn distance(&self, state: &S) -> Option<Cost> {
        self.closed
            .try_get(state)
            .map(|node_id| self.search_space.get_node(node_id).get_g())
    }

    /// Whether the run exhausted the reachable space. A table cut short by a
    /// time limit only holds a subset of the reachable states.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn nodes(&self) -> &NodeCollection<S> {
        &self.closed
    }

    pub fn search_space(&self) -> &SearchSpace<S> {
        &self.search_space
    }

    pub fn len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_state_is_contained() {
        let mut collection = NodeCollection::new();
        collection.add("s", NodeId::new(3)).unwrap();
        assert!(collection.contains(&"s"));
        assert_eq!(collection.get(&"s"), NodeId::new(3));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn adding_duplicate_state_fails() {
        let mut collection = NodeCollection::new();
        collection.add("s", NodeId::new(0)).unwrap();
        assert_eq!(
            collection.add("s", NodeId::new(1)),
            Err(NodeCollectionError::DuplicateState)
        );
        assert_eq!(collection.get(&"s"), NodeId::new(0));
    }

    #[test]
    fn removed_state_is_not_contained() {
        let mut collection = NodeCollection::new();
        collection.add("s", NodeId::new(0)).unwrap();
        assert_eq!(collection.remove(&"s"), Some(NodeId::new(0)));
        assert!(!collection.contains(&"s"));
        assert_eq!(collection.try_get(&"s"), None);
        collection.add("s", NodeId::new(2)).unwrap();
        assert_eq!(collection.get(&"s"), NodeId::new(2));
    }

    #[test]
    #[should_panic(expected = "must be in the collection")]
    fn get_of_absent_state_panics() {
        let collection: NodeCollection<&str> = NodeCollection::new();
        collection.get(&"missing");
    }

    #[test]
    fn distance_table_reads_g_values() {
        let mut space = SearchSpace::new('a');
        let root_id = space.get_root_node().get_node_id();
        let b = space.add_node('b', Cost::from(2.5), root_id);
        let mut closed = NodeCollection::new();
        closed.add('a', root_id).unwrap();
        closed.add('b', b).unwrap();

        let table = DistanceTable::new(space, closed, true);
        assert_eq!(table.distance(&'a'), Some(Cost::from(0.)));
        assert_eq!(table.distance(&'b'), Some(Cost::from(2.5)));
        assert_eq!(table.distance(&'c'), None);
        assert!(table.is_complete());
    }
}
