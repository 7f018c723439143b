use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::{Iter, IterMut, Link, Node, seek_link};
use crate::collections::linked::position::{check_insert_position, check_remove_position};
use crate::util::error::{EmptyStructure, PositionError, PositionOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in a single direction, owning each node through a [`Box`].
///
/// Positions accepted by the positional methods are 1-based: position `1` refers to the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `k`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(k)` |
/// | `insert` | `O(k)` |
/// | `remove` | `O(k)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// There is no tail pointer: reaching the back of the list means walking it.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList { head: None, len: 0 }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Add the provided element to the back of the SinglyLinkedList, walking the whole list to
    /// find the tail.
    pub fn push_back(&mut self, value: T) {
        let tail = seek_link(&mut self.head, self.len);
        *tail = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Removes the first element from the list, returning an [`EmptyStructure`] error if there is
    /// none.
    pub fn try_remove_front(&mut self) -> Result<T, EmptyStructure> {
        self.pop_front().ok_or_else(|| {
            debug!("rejected removal from the front of an empty list");
            EmptyStructure::LIST
        })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty. The list is
    /// walked up to the tail to unlink it.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let node = *seek_link(&mut self.head, last).take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the last element from the list, returning an [`EmptyStructure`] error if there is
    /// none.
    pub fn try_remove_back(&mut self) -> Result<T, EmptyStructure> {
        self.pop_back().ok_or_else(|| {
            debug!("rejected removal from the back of an empty list");
            EmptyStructure::LIST
        })
    }

    /// Returns a reference to the element at the provided 1-based `position`, if there is one.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position.checked_sub(1)?)
    }

    /// Returns a mutable reference to the element at the provided 1-based `position`, if there is
    /// one.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.iter_mut().nth(position.checked_sub(1)?)
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
        check_insert_position(position, self.len)?;

        let link = seek_link(&mut self.head, position - 1);
        let next = link.take();
        *link = Some(Node::boxed(value, next));
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

        let link = seek_link(&mut self.head, position - 1);
        match link.take() {
            Some(node) => {
                let node = *node;
                *link = node.next;
                self.len -= 1;
                Ok(node.value)
            },
            None => Err(PositionOutOfBounds { position, len: self.len }.into()),
        }
    }

    /// Reverses the list in place by relinking its nodes. No values are moved.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns the values of the list from head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item).map(|index| index + 1)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = seek_link(&mut self.head, self.len);
        let mut added = 0;

        for value in iter {
            let node = link.insert(Node::boxed(value, None));
            link = &mut node.next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head recursively would use a stack frame per node.
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "NULL")
    }
}
