use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use crate::collections::linked::position::{check_insert_position, check_remove_position};
use crate::collections::linked::{Arena, NodeId};
use crate::util::error::{EmptyStructure, PositionError};
use crate::util::result::ResultExtension;

/// A singly linked ring: the last node links back to the head, so no link is ever empty while the
/// list holds anything.
///
/// Because of that, nothing here ever stops walking on a missing link. Traversals count hops
/// instead, and stop after exactly `len` of them.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularLinkedList.
/// - `k`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `push_front` | `O(n)` |
/// | `insert` | `O(k)`, `O(n)` at position 1 |
/// | `remove` | `O(k)`, `O(n)` at position 1 |
///
/// Changing the head means finding the node that links to it, which takes a full lap.
pub struct CircularLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Option<NodeId>,
    pub(crate) len: usize,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: NodeId,
}

impl<T> CircularLinkedList<T> {
    /// Creates a new CircularLinkedList with no elements.
    pub const fn new() -> CircularLinkedList<T> {
        CircularLinkedList {
            nodes: Arena::new(),
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the id of the head node, if the ring isn't empty.
    pub const fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the id of the node that `id` links to. Inside a non-empty ring, every node has one.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).map(|node| node.next)
    }

    /// Returns the value held by the node with the provided id.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Returns a reference to the value at the head of the ring, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    /// Adds an element before the current head and makes it the new head.
    pub fn push_front(&mut self, value: T) {
        self.insert(1, value)
    }

    /// Adds an element between the logical tail and the head.
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len + 1, value)
    }

    /// Inserts `value` so that it occupies the provided 1-based `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `position` is `0` or greater than `len + 1`.
    pub fn insert(&mut self, position: usize, value: T) {
        self.try_insert(position, value).throw()
    }

    /// Inserts `value` so that it occupies the provided 1-based `position`. A position of
    /// `len + 1` places the value just before the head, at the logical end of the ring.
    ///
    /// On failure, the list is left unchanged.
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<(), PositionError> {
        check_insert_position(position, self.len)?;

        match self.head {
            None => {
                let node = self.nodes.insert_with(|id| Node { value, next: id });
                self.head = Some(node);
            },
            Some(head) if position == 1 => {
                let tail = self.tail(head);
                let node = self.nodes.insert(Node { value, next: head });
                self.nodes[tail].next = node;
                self.head = Some(node);
            },
            Some(head) => {
                let prev = self.hop(head, position - 2);
                let next = self.nodes[prev].next;
                let node = self.nodes.insert(Node { value, next });
                self.nodes[prev].next = node;
            },
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at the provided 1-based `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `position` is `0`, the list is empty or `position` is greater than `len`.
    pub fn remove(&mut self, position: usize) -> T {
        self.try_remove(position).throw()
    }

    /// Removes and returns the element at the provided 1-based `position`.
    ///
    /// On failure, the list is left unchanged.
    pub fn try_remove(&mut self, position: usize) -> Result<T, PositionError> {
        check_remove_position(position, self.len)?;
        let head = self.head.ok_or(EmptyStructure::LIST)?;

        let target = if position == 1 {
            if self.len == 1 {
                self.head = None;
            } else {
                let tail = self.tail(head);
                let new_head = self.nodes[head].next;
                self.nodes[tail].next = new_head;
                self.head = Some(new_head);
            }
            head
        } else {
            let prev = self.hop(head, position - 2);
            let target = self.nodes[prev].next;
            self.nodes[prev].next = self.nodes[target].next;
            target
        };

        self.len -= 1;
        match self.nodes.remove(target) {
            Some(node) => Ok(node.value),
            None => panic!("Node {target} is not part of this ring!"),
        }
    }

    /// Removes every element from the ring.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    /// Returns an iterator that yields each value once, starting from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Returns the values of the ring, starting from the head.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Follows `count` links from `node`.
    fn hop(&self, mut node: NodeId, count: usize) -> NodeId {
        for _ in 0..count {
            node = self.nodes[node].next;
        }
        node
    }

    /// Finds the node that links back to `head`.
    fn tail(&self, head: NodeId) -> NodeId {
        self.hop(head, self.len - 1)
    }

    /// Asserts that `len` hops from the head return to the head, and that no hop before that does.
    #[cfg(test)]
    pub(crate) fn verify_ring(&self) {
        match self.head {
            None => {
                assert_eq!(self.len, 0);
                assert!(self.nodes.is_empty());
            },
            Some(head) => {
                let mut curr = head;
                for hop in 1..=self.len {
                    curr = self.nodes[curr].next;
                    assert_eq!(curr == head, hop == self.len, "Ring closed after {hop} hops.");
                }
                assert_eq!(self.nodes.len(), self.len);
            },
        }
    }
}

pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.next?];
        self.next = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values = iter.into_iter();
        let mut list = CircularLinkedList::new();

        if let Some(first) = values.next() {
            let head = list.nodes.insert_with(|id| Node { value: first, next: id });
            let mut tail = head;
            list.len = 1;

            for value in values {
                let node = list.nodes.insert(Node { value, next: head });
                list.nodes[tail].next = node;
                tail = node;
                list.len += 1;
            }
            list.head = Some(head);
        }

        list
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularLinkedList<T> {}

impl<T: Debug> Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "(head)")
    }
}
