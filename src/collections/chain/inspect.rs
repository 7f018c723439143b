use super::{NodeGraph, ensure_acyclic};
use crate::collections::linked::NodeId;
use crate::util::error::CycleDetected;

/// Returns the number of nodes in the chain starting at `head`.
pub fn len<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> Result<usize, CycleDetected> {
    ensure_acyclic(graph, head)?;
    Ok(graph.ids(head).count())
}

/// Returns the middle node of the chain, the later of the two for an even length.
///
/// A cyclic chain has no middle, and gives `None`.
pub fn middle<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut slow = head?;
    let mut fast = head?;
    while let Some(step) = graph.next(fast) {
        slow = graph.next(slow)?;
        match graph.next(step) {
            Some(next) => fast = next,
            None => break,
        }
        if slow == fast {
            return None;
        }
    }
    Some(slow)
}

/// Counts the interior nodes whose value is strictly less than both neighbours, or strictly
/// greater than both.
pub fn critical_points<T: PartialOrd>(
    graph: &NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<usize, CycleDetected> {
    ensure_acyclic(graph, head)?;

    let mut ids = graph.ids(head);
    let (Some(mut prev), Some(mut curr)) = (ids.next(), ids.next()) else {
        return Ok(0);
    };

    let mut count = 0;
    for next in ids {
        let (before, value, after) = (&graph[prev], &graph[curr], &graph[next]);
        if (value < before && value < after) || (value > before && value > after) {
            count += 1;
        }
        prev = curr;
        curr = next;
    }
    Ok(count)
}

/// Returns the first node that both chains reach, compared by identity rather than value.
pub fn intersection<T>(
    graph: &NodeGraph<T>,
    a: Option<NodeId>,
    b: Option<NodeId>,
) -> Result<Option<NodeId>, CycleDetected> {
    let len_a = len(graph, a)?;
    let len_b = len(graph, b)?;

    let skip = |head: Option<NodeId>, count: usize| graph.ids(head).nth(count);
    let (mut a, mut b) = if len_a > len_b {
        (skip(a, len_a - len_b), b)
    } else {
        (a, skip(b, len_b - len_a))
    };

    while a != b {
        a = a.and_then(|id| graph.next(id));
        b = b.and_then(|id| graph.next(id));
    }
    Ok(a)
}
