//! Traversals that keep their own frontier in the crate's stacks and queues instead of on the call
//! stack.

use super::{Branch, Node};
use crate::collections::adapters::{LinkedQueue, LinkedStack};
use crate::collections::traits::{Queue, Stack};

fn pop<T>(stack: &mut impl Stack<T>) -> Option<T> {
    if stack.is_empty() { None } else { stack.pop().ok() }
}

fn dequeue<T>(queue: &mut impl Queue<T>) -> Option<T> {
    if queue.is_empty() { None } else { queue.dequeue().ok() }
}

pub(crate) fn in_order<T>(root: &Branch<T>, len: usize) -> Vec<&T> {
    let mut out = Vec::with_capacity(len);
    let mut stack: LinkedStack<&Node<T>> = LinkedStack::new();
    let mut curr = root.as_deref();

    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left.as_deref();
        }
        let Some(node) = pop(&mut stack) else {
            break;
        };
        node.visit(&mut out);
        curr = node.right.as_deref();
    }
    out
}

pub(crate) fn pre_order<T>(root: &Branch<T>, len: usize) -> Vec<&T> {
    let mut out = Vec::with_capacity(len);
    let mut stack: LinkedStack<&Node<T>> = LinkedStack::new();
    stack.extend(root.as_deref());

    while let Some(node) = pop(&mut stack) {
        node.visit(&mut out);
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    out
}

/// Visits nodes in reverse post-order (node, right, left) onto a second stack, then unwinds it.
pub(crate) fn post_order<T>(root: &Branch<T>, len: usize) -> Vec<&T> {
    let mut out = Vec::with_capacity(len);
    let mut pending: LinkedStack<&Node<T>> = LinkedStack::new();
    let mut finished: LinkedStack<&Node<T>> = LinkedStack::new();
    pending.extend(root.as_deref());

    while let Some(node) = pop(&mut pending) {
        finished.push(node);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }
    while let Some(node) = pop(&mut finished) {
        node.visit(&mut out);
    }
    out
}

pub(crate) fn level_order<T>(root: &Branch<T>, len: usize) -> Vec<&T> {
    let mut out = Vec::with_capacity(len);
    let mut queue: LinkedQueue<&Node<T>> = LinkedQueue::new();
    queue.extend(root.as_deref());

    while let Some(node) = dequeue(&mut queue) {
        node.visit(&mut out);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    out
}

pub(crate) fn height<T>(root: &Branch<T>) -> isize {
    let mut queue: LinkedQueue<&Node<T>> = LinkedQueue::new();
    queue.extend(root.as_deref());

    let mut height = -1;
    while !queue.is_empty() {
        for _ in 0..queue.len() {
            let Some(node) = dequeue(&mut queue) else {
                break;
            };
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        height += 1;
    }
    height
}
