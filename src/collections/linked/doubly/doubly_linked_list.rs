use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;
use tracing::debug;

use super::Iter;
use crate::collections::linked::position::{check_insert_position, check_remove_position};
use crate::collections::linked::{Arena, Length, NodeId, ONE};
use crate::util::error::{EmptyStructure, PositionError};
use crate::util::result::ResultExtension;

/// A list with links in both directions, keeping its nodes in an [`Arena`].
///
/// Positions accepted by the positional methods are 1-based: position `1` refers to the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `k`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(k, n-k))` |
/// | `insert` | `O(min(k, n-k))` |
/// | `remove` | `O(min(k, n-k))` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) state: ListState,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: NodeId,
    pub tail: NodeId,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            nodes: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&self.nodes[head].value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&mut self.nodes[head].value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&self.nodes[tail].value),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&mut self.nodes[tail].value),
        }
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(&mut self.nodes, value),
            Full(contents) => {
                let node = self.nodes.insert(Node {
                    value,
                    prev: None,
                    next: Some(contents.head),
                });

                self.nodes[contents.head].prev = Some(node);
                contents.head = node;
                contents.len = contents.len.incremented();
            },
        }
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(&mut self.nodes, value),
            Full(contents) => {
                let node = self.nodes.insert(Node {
                    value,
                    prev: Some(contents.tail),
                    next: None,
                });

                self.nodes[contents.tail].next = Some(node);
                contents.tail = node;
                contents.len = contents.len.incremented();
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(contents) => Some(self.unlink(contents, contents.head)),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(contents) => Some(self.unlink(contents, contents.tail)),
        }
    }

    /// Removes the first element from the list, returning an [`EmptyStructure`] error if there is
    /// none.
    pub fn try_remove_front(&mut self) -> Result<T, EmptyStructure> {
        self.pop_front().ok_or_else(|| {
            debug!("rejected removal from the front of an empty list");
            EmptyStructure::LIST
        })
    }

    /// Returns a reference to the element at the provided 1-based `position`, if there is one.
    pub fn get(&self, position: usize) -> Option<&T> {
        match self.state {
            Full(contents) if (1..=contents.len.get()).contains(&position) => {
                Some(&self.nodes[self.seek(contents, position - 1)].value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to the element at the provided 1-based `position`, if there is
    /// one.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        match self.state {
            Full(contents) if (1..=contents.len.get()).contains(&position) => {
                let node = self.seek(contents, position - 1);
                Some(&mut self.nodes[node].value)
            },
            _ => None,
        }
    }

    /// Inserts `value` so that it occupies the provided 1-based `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `position` is `0` or greater than `len + 1`.
    pub fn insert(&mut self, position: usize, value: T) {
        self.try_insert(position, value).throw()
    }

    /// Inserts `value` so that it occupies the provided 1-based `position`. A position of
    /// `len + 1` appends to the back of the list.
    ///
    /// On failure, the list is left unchanged.
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<(), PositionError> {
        check_insert_position(position, self.len())?;

        match self.state {
            Full(mut contents) if position <= contents.len.get() => {
                let next = self.seek(contents, position - 1);
                let prev = self.nodes[next].prev;
                let node = self.nodes.insert(Node {
                    value,
                    prev,
                    next: Some(next),
                });

                self.nodes[next].prev = Some(node);
                match prev {
                    Some(prev) => self.nodes[prev].next = Some(node),
                    None => contents.head = node,
                }
                contents.len = contents.len.incremented();
                self.state = Full(contents);
            },
            _ => self.push_back(value),
        }
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
        check_remove_position(position, self.len())?;

        match self.state {
            Empty => Err(EmptyStructure::LIST.into()),
            Full(contents) => {
                let node = self.seek(contents, position - 1);
                Ok(self.unlink(contents, node))
            },
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.state = Empty;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the values of the list from front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item).map(|index| index + 1)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Finds the node at the 0-based `index`, starting from whichever end is closer.
    pub(crate) fn seek(&self, contents: ListContents, index: usize) -> NodeId {
        if index < contents.len.get() / 2 {
            self.seek_fwd(index, contents.head)
        } else {
            self.seek_bwd(contents.len.get() - 1 - index, contents.tail)
        }
    }

    fn seek_fwd(&self, count: usize, mut node: NodeId) -> NodeId {
        for _ in 0..count {
            match self.nodes[node].next {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    fn seek_bwd(&self, count: usize, mut node: NodeId) -> NodeId {
        for _ in 0..count {
            match self.nodes[node].prev {
                Some(prev) => node = prev,
                None => break,
            }
        }
        node
    }

    /// Detaches `node` from its neighbours, updating head, tail and length, and returns its value.
    fn unlink(&mut self, mut contents: ListContents, node: NodeId) -> T {
        let Node { value, prev, next } = match self.nodes.remove(node) {
            Some(removed) => removed,
            None => panic!("Node {node} is not part of this list!"),
        };

        match contents.len.decremented() {
            None => self.state = Empty,
            Some(new_len) => {
                match prev {
                    Some(prev) => self.nodes[prev].next = next,
                    None => if let Some(next) = next {
                        contents.head = next;
                    },
                }
                match next {
                    Some(next) => self.nodes[next].prev = prev,
                    None => if let Some(prev) = prev {
                        contents.tail = prev;
                    },
                }
                contents.len = new_len;
                self.state = Full(contents);
            },
        }

        value
    }

    /// Walks the list in both directions, asserting that every link is mirrored and that the
    /// recorded length, head and tail agree with what the walk found.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => assert!(self.nodes.is_empty(), "An empty list shouldn't hold any nodes."),
            Full(ListContents { len, head, tail }) => {
                assert!(self.nodes[head].prev.is_none());
                let mut curr = head;
                let mut count = 1;
                while let Some(next) = self.nodes[curr].next {
                    assert!(self.nodes[next].prev == Some(curr));
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, len.get());
                assert_eq!(self.nodes.len(), len.get());
            },
        }
    }
}

impl ListState {
    pub fn single<T>(nodes: &mut Arena<Node<T>>, value: T) -> ListState {
        let node = nodes.insert(Node {
            value,
            prev: None,
            next: None,
        });

        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "NULL")
    }
}
