use tracing::trace;

use super::{NodeGraph, Segment, ensure_acyclic};
use crate::collections::linked::NodeId;
use crate::util::error::CycleDetected;

/// Sorts the chain by relinking its nodes, returning the new head. The sort is stable: equal
/// values keep their relative order.
pub fn merge_sort<T: PartialOrd>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<Option<NodeId>, CycleDetected> {
    ensure_acyclic(graph, head)?;
    let sorted = sort(graph, head);
    trace!("sorted chain");
    Ok(sorted)
}

/// Merges two sorted chains into one, returning its head. On ties, nodes from `a` come first.
pub fn merge_sorted<T: PartialOrd>(
    graph: &mut NodeGraph<T>,
    a: Option<NodeId>,
    b: Option<NodeId>,
) -> Result<Option<NodeId>, CycleDetected> {
    ensure_acyclic(graph, a)?;
    ensure_acyclic(graph, b)?;
    Ok(merge(graph, a, b))
}

fn sort<T: PartialOrd>(graph: &mut NodeGraph<T>, head: Option<NodeId>) -> Option<NodeId> {
    let first = head?;
    if graph.next(first).is_none() {
        return head;
    }

    let back = split(graph, first);
    let front = sort(graph, head);
    let back = sort(graph, back);
    merge(graph, front, back)
}

/// Cuts the chain after its lower middle, returning the head of the back half.
fn split<T>(graph: &mut NodeGraph<T>, head: NodeId) -> Option<NodeId> {
    let mut slow = head;
    let mut fast = head;
    while let Some(next) = graph.next(fast).and_then(|step| graph.next(step)) {
        fast = next;
        if let Some(step) = graph.next(slow) {
            slow = step;
        }
    }
    graph.set_next(slow, None)
}

fn merge<T: PartialOrd>(
    graph: &mut NodeGraph<T>,
    mut a: Option<NodeId>,
    mut b: Option<NodeId>,
) -> Option<NodeId> {
    let mut merged = Segment::default();
    loop {
        let node = match (a, b) {
            (Some(left), Some(right)) => {
                if graph[left] <= graph[right] {
                    a = graph.next(left);
                    left
                } else {
                    b = graph.next(right);
                    right
                }
            },
            (rest, None) | (None, rest) => {
                if let Some(rest) = rest {
                    merged.push(graph, rest);
                }
                return merged.head;
            },
        };
        merged.push(graph, node);
    }
}
