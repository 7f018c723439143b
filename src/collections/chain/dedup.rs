use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use super::{NodeGraph, Segment, ensure_acyclic};
use crate::collections::linked::NodeId;
use crate::util::error::CycleDetected;

/// Removes every node equal to the one before it, so that a sorted chain holds each value once.
/// Returns the number of nodes removed.
///
/// Removed nodes are released from the graph. They must not be reachable from any other chain.
pub fn dedup_sorted<T: PartialEq>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<usize, CycleDetected> {
    ensure_acyclic(graph, head)?;

    let mut removed = 0;
    let mut curr = head;
    while let Some(id) = curr {
        match graph.next(id) {
            Some(next) if graph[next] == graph[id] => {
                let after = graph.next(next);
                graph.set_next(id, after);
                graph.release(next);
                removed += 1;
            },
            next => curr = next,
        }
    }

    trace!(removed, "deduplicated sorted chain");
    Ok(removed)
}

/// Removes every node whose value appeared earlier in the chain, keeping first occurrences in
/// their original order. Returns the number of nodes removed.
///
/// Removed nodes are released from the graph. They must not be reachable from any other chain.
pub fn dedup_unsorted<T: Hash + Eq>(
    graph: &mut NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<usize, CycleDetected> {
    ensure_acyclic(graph, head)?;

    let mut seen = HashSet::new();
    let (kept, duplicates): (Vec<NodeId>, Vec<NodeId>) =
        graph.ids(head).partition(|&id| seen.insert(&graph[id]));
    drop(seen);

    let mut chain = Segment::default();
    for id in kept {
        chain.push(graph, id);
    }
    chain.terminate(graph);

    for &id in &duplicates {
        graph.release(id);
    }

    trace!(removed = duplicates.len(), "deduplicated unsorted chain");
    Ok(duplicates.len())
}
