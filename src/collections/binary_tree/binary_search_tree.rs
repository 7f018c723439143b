use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use tracing::{debug, trace};

use super::{Branch, Node, iterative};
use crate::config::{Traversal, TreeConfig};
use crate::util::error::RejectedDuplicate;

/// An unbalanced binary search tree: values less than a node go to its left, everything else to
/// its right.
///
/// What happens to a value equal to one already in the tree is up to the
/// [`DuplicatePolicy`](crate::config::DuplicatePolicy) in the tree's [`TreeConfig`]. The config
/// also decides whether the depth-first traversals and [`height`](BinarySearchTree::height) recurse
/// or run on the crate's own stacks and queues. Both variants are always available directly too,
/// and always agree. Lookups, removal, clearing and the `Debug` drawing never recurse.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the tree.
/// - `h`: The height of the tree, `log n` when balanced and up to `n` when not.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `min` / `max` | `O(h)` |
/// | `*_order` | `O(n)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) config: TreeConfig,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree with the default configuration, which allows duplicates and
    /// traverses recursively.
    pub const fn new() -> BinarySearchTree<T> {
        Self::with_config(TreeConfig::new())
    }

    pub const fn with_config(config: TreeConfig) -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
            config,
        }
    }

    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the number of values in the tree. Counted duplicates are included.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.last()
    }

    /// Returns the number of edges on the longest path from the root to a leaf: 0 for a lone root
    /// and -1 for an empty tree.
    pub fn height(&self) -> isize {
        match self.config.traversal {
            Traversal::Recursive => self.height_recursive(),
            Traversal::Iterative => self.height_iterative(),
        }
    }

    pub fn height_recursive(&self) -> isize {
        self.root.height()
    }

    /// Computes the height by walking the tree one level at a time.
    pub fn height_iterative(&self) -> isize {
        iterative::height(&self.root)
    }

    /// Returns the values of the tree in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        match self.config.traversal {
            Traversal::Recursive => self.in_order_recursive(),
            Traversal::Iterative => self.in_order_iterative(),
        }
    }

    pub fn in_order_recursive(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        self.root.in_order(&mut out);
        out
    }

    pub fn in_order_iterative(&self) -> Vec<&T> {
        iterative::in_order(&self.root, self.len)
    }

    /// Returns the values of the tree with each node before its subtrees.
    pub fn pre_order(&self) -> Vec<&T> {
        match self.config.traversal {
            Traversal::Recursive => self.pre_order_recursive(),
            Traversal::Iterative => self.pre_order_iterative(),
        }
    }

    pub fn pre_order_recursive(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        self.root.pre_order(&mut out);
        out
    }

    pub fn pre_order_iterative(&self) -> Vec<&T> {
        iterative::pre_order(&self.root, self.len)
    }

    /// Returns the values of the tree with each node after its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        match self.config.traversal {
            Traversal::Recursive => self.post_order_recursive(),
            Traversal::Iterative => self.post_order_iterative(),
        }
    }

    pub fn post_order_recursive(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        self.root.post_order(&mut out);
        out
    }

    pub fn post_order_iterative(&self) -> Vec<&T> {
        iterative::post_order(&self.root, self.len)
    }

    /// Returns the values of the tree level by level, left to right within each level.
    pub fn level_order(&self) -> Vec<&T> {
        iterative::level_order(&self.root, self.len)
    }

    /// Removes every value from the tree, keeping its configuration.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` into the tree.
    ///
    /// Only fails when the tree rejects duplicates and already holds an equal value, in which case
    /// the tree is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), RejectedDuplicate> {
        match self.root.insert(value, self.config.duplicates) {
            Ok(()) => {
                self.len += 1;
                trace!(len = self.len, "inserted value into tree");
                Ok(())
            },
            Err(err) => {
                debug!("rejected duplicate value");
                Err(err)
            },
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Removes one occurrence of `value` from the tree, returning whether it was present.
    ///
    /// When duplicates are counted, a value held more than once only has its count decremented.
    /// A node with two children is replaced by its in-order successor.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = self.root.remove(value);
        if removed {
            self.len -= 1;
            trace!(len = self.len, "removed value from tree");
        }
        removed
    }

    /// Returns the number of edges between the root and the first node holding `value`.
    pub fn depth_of(&self, value: &T) -> Option<usize> {
        let mut depth = 0;
        let mut branch = &self.root;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(depth),
            };
            depth += 1;
        }
        None
    }

    /// Returns the values passed on the way from the root to the first node holding `value`,
    /// starting with the root and ending with that node.
    pub fn path_to(&self, value: &T) -> Option<Vec<&T>> {
        self.root.path_to(value)
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    /// Inserts every value in turn. Values refused by the tree's duplicate policy are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value).ok();
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.root)
    }
}
