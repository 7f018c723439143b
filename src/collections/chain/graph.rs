use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::ensure_acyclic;
use crate::collections::linked::{Arena, NodeId, SinglyLinkedList};
use crate::util::error::{CloseCycleError, CycleDetected, InvalidPosition, PositionOutOfBounds};

/// A pool of singly linked nodes that can be wired into any shape.
///
/// Unlike the lists in [`linked`](crate::collections::linked), a NodeGraph doesn't enforce that
/// its nodes form a single terminated chain. Several chains can live in the same graph, chains can
/// share a tail, and a tail can be linked back into its own chain to form a cycle. This is the
/// ground the pointer-chasing algorithms in this module run on: each of them takes the graph and
/// the head of the chain to work on.
///
/// Every node is still owned by the graph alone. Dropping the graph drops all of them, whatever
/// shape they were in.
pub struct NodeGraph<T> {
    pub(crate) nodes: Arena<ChainNode<T>>,
}

#[derive(Debug)]
pub(crate) struct ChainNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

impl<T> NodeGraph<T> {
    pub const fn new() -> NodeGraph<T> {
        NodeGraph { nodes: Arena::new() }
    }

    /// Returns the number of nodes in the graph, across all chains.
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a single unlinked node.
    pub fn node(&mut self, value: T) -> NodeId {
        self.nodes.insert(ChainNode { value, next: None })
    }

    /// Adds a new terminated chain holding `values` in order, returning its head.
    pub fn push_chain<I: IntoIterator<Item = T>>(&mut self, values: I) -> Option<NodeId> {
        let mut chain = Segment::default();
        for value in values {
            let node = self.node(value);
            chain.push(self, node);
        }
        chain.head
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Returns the node that `id` links to, if any.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes
            .get(id)
            .and_then(|node| node.next)
            .filter(|&next| self.nodes.contains(next))
    }

    /// Points `id` at `next`, returning the link it had before.
    ///
    /// # Panics
    /// Panics if `id` isn't a node of this graph.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.nodes[id].next, next)
    }

    /// Returns the node at the 1-based `position` of the chain starting at `head`. This follows at
    /// most `position - 1` links, so it terminates on cyclic chains too.
    pub fn nth(&self, head: Option<NodeId>, position: usize) -> Option<NodeId> {
        let mut curr = head;
        for _ in 1..position {
            curr = self.next(curr?);
        }
        if position == 0 { None } else { curr }
    }

    /// Returns the last node of the chain starting at `head`.
    pub fn tail(&self, head: Option<NodeId>) -> Result<Option<NodeId>, CycleDetected> {
        ensure_acyclic(self, head)?;
        Ok(self.ids(head).last())
    }

    /// Links the tail of the chain starting at `head` to the node at the 1-based `position`,
    /// creating a cycle that starts there. A chain that already loops has no tail to link.
    pub fn close_cycle(
        &mut self,
        head: Option<NodeId>,
        position: usize,
    ) -> Result<(), CloseCycleError> {
        if position == 0 {
            debug!(position, "rejected cycle entry at invalid position");
            return Err(InvalidPosition { position }.into());
        }

        let tail = self.tail(head)?;
        let entry = self.nth(head, position);

        match (tail, entry) {
            (Some(tail), Some(entry)) => {
                self.set_next(tail, Some(entry));
                Ok(())
            },
            _ => {
                let len = self.ids(head).count();
                debug!(position, len, "rejected cycle entry past the end of the chain");
                Err(PositionOutOfBounds { position, len }.into())
            },
        }
    }

    /// Removes a node from the graph, returning its value.
    ///
    /// Any link still pointing at the node becomes dangling and reads as the end of a chain from
    /// then on, even once a new node reuses the released slot.
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        self.nodes.remove(id).map(|node| node.value)
    }

    /// Returns an iterator over the ids of the chain starting at `head`.
    ///
    /// The iterator follows links for as long as there are any, so it never ends on a cyclic
    /// chain. Bound it with [`take`](Iterator::take) or check with
    /// [`has_cycle`](super::has_cycle) first.
    pub fn ids(&self, head: Option<NodeId>) -> Ids<'_, T> {
        Ids { graph: self, next: head }
    }

    /// Returns an iterator over the values of the chain starting at `head`. The same caveat as for
    /// [`ids`](NodeGraph::ids) applies to cyclic chains.
    pub fn iter(&self, head: Option<NodeId>) -> impl Iterator<Item = &T> + '_ {
        self.ids(head).map(|id| &self[id])
    }

    /// Returns the values of the chain starting at `head`, in order.
    pub fn values(&self, head: Option<NodeId>) -> Result<Vec<T>, CycleDetected>
    where
        T: Clone,
    {
        ensure_acyclic(self, head)?;
        Ok(self.iter(head).cloned().collect())
    }

    /// Moves every value of `list` into a fresh graph as a single chain, returning the graph and
    /// the chain's head.
    pub fn from_list(list: SinglyLinkedList<T>) -> (NodeGraph<T>, Option<NodeId>) {
        let mut graph = NodeGraph::new();
        let head = graph.push_chain(list);
        (graph, head)
    }

    /// Moves the values of the chain starting at `head` out into a [`SinglyLinkedList`]. Nodes
    /// that aren't part of that chain are dropped with the graph.
    pub fn into_list(
        mut self,
        head: Option<NodeId>,
    ) -> Result<SinglyLinkedList<T>, CycleDetected> {
        ensure_acyclic(&self, head)?;

        let mut values = Vec::new();
        let mut curr = head;
        while let Some(node) = curr.and_then(|id| self.nodes.remove(id)) {
            values.push(node.value);
            curr = node.next;
        }
        Ok(values.into_iter().collect())
    }
}

impl<T> Default for NodeGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeGraph<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id].value
    }
}

impl<T> IndexMut<NodeId> for NodeGraph<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id].value
    }
}

impl<T: Debug> Debug for NodeGraph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeGraph").field("nodes", &self.nodes).finish()
    }
}

pub struct Ids<'a, T> {
    graph: &'a NodeGraph<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next.filter(|&id| self.graph.nodes.contains(id))?;
        self.next = self.graph.next(curr);
        Some(curr)
    }
}

impl<T> FusedIterator for Ids<'_, T> {}

/// A chain under construction: nodes are appended at the tail, and the head is remembered.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Segment {
    pub head: Option<NodeId>,
    pub tail: Option<NodeId>,
}

impl Segment {
    /// Appends `node` after the current tail. The node's own link is left as it was.
    pub fn push<T>(&mut self, graph: &mut NodeGraph<T>, node: NodeId) {
        match self.tail {
            Some(tail) => {
                graph.set_next(tail, Some(node));
            },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Cuts the segment off after its tail.
    pub fn terminate<T>(&self, graph: &mut NodeGraph<T>) {
        if let Some(tail) = self.tail {
            graph.set_next(tail, None);
        }
    }
}
