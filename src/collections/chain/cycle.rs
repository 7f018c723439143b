use tracing::{debug, trace};

use super::NodeGraph;
use crate::collections::linked::NodeId;
use crate::util::error::CycleDetected;

/// Runs a slow and a fast cursor down the chain, returning the node where they meet. They only
/// meet if the chain loops.
pub fn meeting_point<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut slow = head?;
    let mut fast = head?;
    loop {
        fast = graph.next(graph.next(fast)?)?;
        slow = graph.next(slow)?;
        if slow == fast {
            trace!(%slow, "cursors met");
            return Some(slow);
        }
    }
}

/// Returns true if following links from `head` never reaches an end.
pub fn has_cycle<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> bool {
    meeting_point(graph, head).is_some()
}

/// Returns the first node of the chain that is part of its cycle, if it has one.
///
/// Once the cursors have met, the distance from the head to the start of the cycle equals the
/// distance from the meeting point onwards to it, so two cursors stepping together from those
/// nodes meet at the start.
pub fn cycle_start<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut from_meeting = meeting_point(graph, head)?;
    let mut from_head = head?;
    while from_head != from_meeting {
        from_head = graph.next(from_head)?;
        from_meeting = graph.next(from_meeting)?;
    }
    trace!(start = %from_head, "found cycle start");
    Some(from_head)
}

/// Returns the number of nodes in the chain's cycle, or 0 if it doesn't loop.
pub fn cycle_len<T>(graph: &NodeGraph<T>, head: Option<NodeId>) -> usize {
    let Some(meeting) = meeting_point(graph, head) else {
        return 0;
    };

    let mut len = 1;
    let mut curr = graph.next(meeting);
    while let Some(id) = curr {
        if id == meeting {
            break;
        }
        len += 1;
        curr = graph.next(id);
    }
    len
}

pub(crate) fn ensure_acyclic<T>(
    graph: &NodeGraph<T>,
    head: Option<NodeId>,
) -> Result<(), CycleDetected> {
    if has_cycle(graph, head) {
        debug!("rejected a chain that loops");
        return Err(CycleDetected);
    }
    Ok(())
}
