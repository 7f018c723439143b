use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ops::{Deref, DerefMut};

use crate::config::DuplicatePolicy;
use crate::util::error::RejectedDuplicate;

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
    /// Occurrences of `value` held by this node. Always 1 unless duplicates are counted.
    pub count: usize,
}

impl<T> Node<T> {
    pub fn boxed(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            value,
            count: 1,
        })
    }

    /// Pushes the node's value onto `out`, once per occurrence.
    pub fn visit<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(iter::repeat_n(&self.value, self.count));
    }
}

impl<T: Ord> Branch<T> {
    /// Descends to the empty branch where `value` belongs and places it there. Equal values are
    /// handled according to `policy`.
    pub fn insert(&mut self, value: T, policy: DuplicatePolicy) -> Result<(), RejectedDuplicate> {
        let mut branch = &mut self.0;
        while let Some(node) = branch {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left.0,
                Ordering::Greater => &mut node.right.0,
                Ordering::Equal => match policy {
                    DuplicatePolicy::Allow => &mut node.right.0,
                    DuplicatePolicy::Reject => return Err(RejectedDuplicate),
                    DuplicatePolicy::Count => {
                        node.count += 1;
                        return Ok(());
                    },
                },
            };
        }
        *branch = Some(Node::boxed(value));
        Ok(())
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes one occurrence of `value` from below this branch, returning whether there was one.
    ///
    /// A counted node only loses a count. Otherwise the node is unlinked: a missing child lets the
    /// other one take its place, and with both present its in-order successor moves up into it.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            branch = match &mut branch.0 {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                },
                None => return false,
            };
        }

        let Some(mut node) = branch.0.take() else {
            return false;
        };
        if node.count > 1 {
            node.count -= 1;
            branch.0 = Some(node);
            return true;
        }

        branch.0 = match (node.left.0.take(), node.right.0.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, right) => {
                let mut right = Branch(right);
                right.take_first().map(|mut successor| {
                    successor.left = Branch(left);
                    successor.right = right;
                    successor
                })
            },
        };
        true
    }

    /// Returns the values on the way from this branch down to the first node equal to `value`,
    /// both ends included.
    pub fn path_to(&self, value: &T) -> Option<Vec<&T>> {
        let mut path = Vec::new();
        let mut branch = self;
        while let Some(node) = &branch.0 {
            path.push(&node.value);
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(path),
            };
        }
        None
    }
}

impl<T> Branch<T> {
    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Detaches the leftmost node below this branch, letting its right child take its place.
    pub fn take_first(&mut self) -> Option<Box<Node<T>>> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.left.is_some()) {
            match &mut branch.0 {
                Some(node) => branch = &mut node.left,
                None => return None,
            }
        }
        let mut first = branch.0.take()?;
        branch.0 = first.right.0.take();
        Some(first)
    }

    /// The number of edges on the longest path down from this branch, or -1 if it is empty.
    pub fn height(&self) -> isize {
        match &self.0 {
            Some(node) => 1 + node.left.height().max(node.right.height()),
            None => -1,
        }
    }

    pub fn in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(node) = &self.0 {
            node.left.in_order(out);
            node.visit(out);
            node.right.in_order(out);
        }
    }

    pub fn pre_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(node) = &self.0 {
            node.visit(out);
            node.left.pre_order(out);
            node.right.pre_order(out);
        }
    }

    pub fn post_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(node) = &self.0 {
            node.left.post_order(out);
            node.right.post_order(out);
            node.visit(out);
        }
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Draws the branch sideways, one line per node or empty child in order, with the root flush
/// left. Each line is prefixed by `┌` for every left turn on the way down to it and `└` for every
/// right turn.
impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        enum Step<'a, T> {
            Descend(&'a Branch<T>),
            Draw(&'a Node<T>),
        }

        let mut pending = vec![(Step::Descend(self), String::new())];
        let mut first = true;
        while let Some((step, prefix)) = pending.pop() {
            let drawn = match step {
                Step::Descend(branch) => match &branch.0 {
                    Some(node) => {
                        pending.push((Step::Descend(&node.right), prefix.clone() + "└    "));
                        pending.push((Step::Draw(&**node), prefix.clone()));
                        pending.push((Step::Descend(&node.left), prefix + "┌    "));
                        continue;
                    },
                    None => None,
                },
                Step::Draw(node) => Some(node),
            };

            if !first {
                writeln!(f)?;
            }
            first = false;
            match drawn {
                Some(node) => {
                    write!(f, "{prefix}({:?}", node.value)?;
                    if node.count > 1 {
                        write!(f, " x{}", node.count)?;
                    }
                    write!(f, ")")?;
                },
                None => write!(f, "{prefix}-")?,
            }
        }
        Ok(())
    }
}
