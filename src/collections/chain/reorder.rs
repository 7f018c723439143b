use std::ops::Rem;

use tracing::trace;

use super::{NodeGraph, Segment, ensure_acyclic};
use crate::collections::linked::NodeId;
use crate::util::error::CycleDetected;

/// Reverses the chain in place by flipping each link, returning the new head (the old tail).
pub fn reverse<T>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<Option<NodeId>, CycleDetected> {
    ensure_acyclic(graph, head)?;

    let mut prev = None;
    let mut curr = head;
    while let Some(id) = curr {
        curr = graph.set_next(id, prev);
        prev = Some(id);
    }
    Ok(prev)
}

/// Rotates the chain `k` places to the right: the last `k % len` nodes move to the front, in
/// order. Rotating by a multiple of the length leaves the chain as it was.
pub fn rotate_right<T>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
    k: usize,
) -> Result<Option<NodeId>, CycleDetected> {
    ensure_acyclic(graph, head)?;
    let Some(old_head) = head else {
        return Ok(None);
    };

    let mut len = 1;
    let mut old_tail = old_head;
    while let Some(next) = graph.next(old_tail) {
        old_tail = next;
        len += 1;
    }

    let k = k % len;
    if k == 0 {
        return Ok(head);
    }

    // The node len - k - 1 links past the head becomes the tail.
    let new_tail = graph.nth(head, len - k).unwrap_or(old_tail);
    let new_head = graph.set_next(new_tail, None);
    graph.set_next(old_tail, Some(old_head));
    trace!(k, len, "rotated chain");
    Ok(new_head)
}

/// Moves every node whose value satisfies `pred` in front of those that don't. Both groups keep
/// their relative order.
pub fn partition_by<T, F>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
    mut pred: F,
) -> Result<Option<NodeId>, CycleDetected>
where
    F: FnMut(&T) -> bool,
{
    ensure_acyclic(graph, head)?;

    let mut matched = Segment::default();
    let mut rest = Segment::default();
    let mut curr = head;
    while let Some(id) = curr {
        curr = graph.next(id);
        if pred(&graph[id]) {
            matched.push(graph, id);
        } else {
            rest.push(graph, id);
        }
    }

    rest.terminate(graph);
    match matched.tail {
        Some(tail) => {
            graph.set_next(tail, rest.head);
            Ok(matched.head)
        },
        None => Ok(rest.head),
    }
}

/// Moves every node holding an even value in front of the odd ones, keeping the order within
/// each group.
pub fn partition_even_odd<T>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<Option<NodeId>, CycleDetected>
where
    T: Copy + Rem<Output = T> + From<u8> + PartialEq,
{
    partition_by(graph, head, |value| *value % T::from(2) == T::from(0))
}
