//! Open lists (frontiers) for the search engines. Both lists hold at most one
//! entry per state and can be queried by state, so the engines can tell
//! whether a freshly generated state is already waiting to be expanded.

use crate::search::{errors::NodeCollectionError, Cost, NodeCollection, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::hash::Hash;

/// First-in first-out open list, used by breadth-first search.
#[derive(Debug)]
pub struct FifoOpenList<S> {
    queue: VecDeque<S>,
    index: NodeCollection<S>,
}

impl<S: Clone + Eq + Hash> FifoOpenList<S> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            index: NodeCollection::new(),
        }
    }

    pub fn add(&mut self, state: S, node_id: NodeId) -> Result<(), NodeCollectionError> {
        self.index.add(state.clone(), node_id)?;
        self.queue.push_back(state);
        Ok(())
    }

    /// Remove and return the earliest added node.
    pub fn pop(&mut self) -> Option<NodeId> {
        let state = self.queue.pop_front()?;
        self.index.remove(&state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains(state)
    }

    pub fn get(&self, state: &S) -> NodeId {
        self.index.get(state)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<S: Clone + Eq + Hash> Default for FifoOpenList<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering key of an entry in a [`PriorityOpenList`]. Entries with equal
/// priority are ordered by when they were inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    priority: Cost,
    insertion: u64,
    node_id: NodeId,
}

/// Min-priority open list keyed by state, used by the best-first engines.
///
/// Popping returns the node with the lowest priority; among equal priorities
/// the one inserted first wins. Changing the priority of a state is done by
/// [`PriorityOpenList::remove`] followed by [`PriorityOpenList::add`], which
/// also moves the state to the back of its priority class.
#[derive(Debug)]
pub struct PriorityOpenList<S: Hash + Eq> {
    queue: PriorityQueue<S, Reverse<OpenEntry>>,
    insertions: u64,
}

impl<S: Hash + Eq> PriorityOpenList<S> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            insertions: 0,
        }
    }

    pub fn add(
        &mut self,
        state: S,
        node_id: NodeId,
        priority: Cost,
    ) -> Result<(), NodeCollectionError> {
        if self.queue.get(&state).is_some() {
            return Err(NodeCollectionError::DuplicateState);
        }
        let entry = OpenEntry {
            priority,
            insertion: self.insertions,
            node_id,
        };
        self.insertions += 1;
        self.queue.push(state, Reverse(entry));
        Ok(())
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(_, Reverse(entry))| entry.node_id)
    }

    /// Like [`PriorityOpenList::pop`], but also reports the priority the node
    /// was stored with.
    pub fn pop_with_priority(&mut self) -> Option<(NodeId, Cost)> {
        self.queue
            .pop()
            .map(|(_, Reverse(entry))| (entry.node_id, entry.priority))
    }

    pub fn remove(&mut self, state: &S) -> Option<NodeId> {
        self.queue
            .remove(state)
            .map(|(_, Reverse(entry))| entry.node_id)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.queue.get(state).is_some()
    }

    /// # Panics
    ///
    /// Panics if `state` is not in the open list.
    pub fn get(&self, state: &S) -> NodeId {
        self.try_get(state)
            .expect("State must be in the open list before it is looked up")
    }

    pub fn try_get(&self, state: &S) -> Option<NodeId> {
        self.queue
            .get_priority(state)
            .map(|Reverse(entry)| entry.node_id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<S: Hash + Eq> Default for PriorityOpenList<S> {
    fn default() -> Self {
        Self::new()
    }
}
