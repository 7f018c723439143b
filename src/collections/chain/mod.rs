//! Pointer-chasing algorithms over chains of singly linked nodes.
//!
//! Everything here works on a [`NodeGraph`], addressing chains by the [`NodeId`] of their head.
//! `None` stands for the empty chain throughout. Algorithms that restructure a chain do so in
//! place by relinking nodes (values are never moved between nodes) and return the id of the new
//! head, which the caller should use from then on.
//!
//! Walking a cyclic chain to its end would never finish, so every algorithm that needs one
//! checks first and returns [`CycleDetected`](crate::error::CycleDetected) instead. The cycle
//! algorithms themselves are the exception and accept any chain.
//!
//! # Time Complexity
//! For this analysis of time complexity, variables are defined as follows:
//! - `n`: The number of nodes in the chain.
//! - `m`: The number of nodes in a second chain.
//!
//! | Function | Time | Extra Space |
//! |-|-|-|
//! | `has_cycle`, `cycle_start`, `cycle_len` | `O(n)` | `O(1)` |
//! | `middle` | `O(n)` | `O(1)` |
//! | `reverse`, `rotate_right` | `O(n)` | `O(1)` |
//! | `dedup_sorted` | `O(n)` | `O(1)` |
//! | `dedup_unsorted` | `O(n)` expected | `O(n)` |
//! | `partition_by`, `partition_even_odd` | `O(n)` | `O(1)` |
//! | `merge_sort` | `O(n log n)` | `O(log n)` |
//! | `merge_sorted` | `O(n + m)` | `O(1)` |
//! | `intersection` | `O(n + m)` | `O(1)` |
//!
//! [`NodeId`]: crate::collections::linked::NodeId

mod cycle;
mod dedup;
mod graph;
mod inspect;
mod reorder;
mod sort;

pub use cycle::*;
pub use dedup::*;
pub use graph::{Ids, NodeGraph};
pub use inspect::*;
pub use reorder::*;
pub use sort::*;

pub(crate) use graph::Segment;
