//! Stack, queue and deque adapters over either a contiguous buffer or a chain of linked nodes.
//!
//! Each discipline comes in three flavours: an `Array*` type backed by a [`Vec`], a `Linked*`
//! type backed by one of the crate's linked lists, and a `Selected*` type that picks one of the
//! two from a [`Backing`](crate::config::Backing) at construction. All of them implement the
//! matching trait from [`traits`](super::traits), and all of them report an
//! [`EmptyStructure`] error rather than a default value when there is nothing to return.
//!
//! # Time Complexity
//! | Operation | Array | Linked |
//! |-|-|-|
//! | `push/pop/peek` (stack) | `O(1)`* | `O(1)` |
//! | `enqueue` (queue) | `O(1)`* | `O(1)` |
//! | `dequeue` (queue) | `O(n)` | `O(1)` |
//! | rear operations (deque) | `O(1)`* | `O(1)` |
//! | front operations (deque) | `O(n)` | `O(1)` |
//!
//! \* amortized. Array-backed front removal shifts every remaining element; there is no ring
//! buffer here.

pub mod applications;
mod deque;
mod queue;
mod stack;
mod tests;

pub use deque::*;
pub use queue::*;
pub use stack::*;

use tracing::debug;

use crate::util::error::EmptyStructure;

/// Reports an access to an empty adapter and passes the error through.
pub(crate) fn rejected(error: EmptyStructure) -> EmptyStructure {
    debug!(kind = %error.kind, "rejected access to an empty structure");
    error
}
