//! Construction-time configuration for the collections that have more than one reasonable
//! behaviour.
//!
//! Everything here is a small [`Copy`] value with `const` builders, so configurations can be
//! declared as constants and passed around freely. With the `serde` feature enabled, all of them
//! can also be (de)serialized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The storage behind a selected stack, queue or deque.
///
/// Both backings provide identical behaviour and differ only in cost: removing from the front of
/// a contiguous backing shifts every remaining element, whereas the linked backing relinks a
/// single node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Backing {
    /// A growable contiguous buffer.
    Contiguous,
    /// A chain of linked nodes.
    #[default]
    Linked,
}

/// What a binary search tree does when it is given a value equal to one it already holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Store the value again, in the right subtree of its equal.
    #[default]
    Allow,
    /// Refuse the value and report a [`RejectedDuplicate`](crate::error::RejectedDuplicate).
    Reject,
    /// Keep one node per distinct value and count its occurrences.
    Count,
}

/// How a binary search tree walks itself for depth-first orders and height.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Traversal {
    /// Plain recursion, one stack frame per level.
    #[default]
    Recursive,
    /// An explicit stack (or queue, for height), so deep or skewed trees can't exhaust the call
    /// stack.
    Iterative,
}

/// Configuration for a [`BinarySearchTree`](crate::collections::binary_tree::BinarySearchTree).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
    pub traversal: Traversal,
}

impl TreeConfig {
    pub const fn new() -> TreeConfig {
        TreeConfig {
            duplicates: DuplicatePolicy::Allow,
            traversal: Traversal::Recursive,
        }
    }

    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> TreeConfig {
        self.duplicates = duplicates;
        self
    }

    pub const fn with_traversal(mut self, traversal: Traversal) -> TreeConfig {
        self.traversal = traversal;
        self
    }
}
