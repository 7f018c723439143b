use std::iter::FusedIterator;

use super::{DoublyLinkedList, ListContents, ListState, Node};
use crate::collections::linked::{Arena, NodeId};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            state: self.state,
        }
    }
}

pub struct Iter<'a, T> {
    // Head, tail and len of the remaining range. The nodes themselves are never modified.
    pub(crate) nodes: &'a Arena<Node<T>>,
    pub(crate) state: ListState,
}

impl<'a, T> Iter<'a, T> {
    fn advance(&mut self, from_back: bool) -> Option<&'a T> {
        match &mut self.state {
            ListState::Empty => None,
            ListState::Full(ListContents { len, head, tail }) => {
                let nodes: &'a Arena<Node<T>> = self.nodes;
                let current: NodeId = if from_back { *tail } else { *head };
                let node = &nodes[current];

                match (len.decremented(), if from_back { node.prev } else { node.next }) {
                    (Some(new_len), Some(neighbour)) => {
                        if from_back {
                            *tail = neighbour;
                        } else {
                            *head = neighbour;
                        }
                        *len = new_len;
                    },
                    _ => self.state = ListState::Empty,
                }

                Some(&node.value)
            },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance(false)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.advance(true)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            state: self.state,
        }
    }
}
