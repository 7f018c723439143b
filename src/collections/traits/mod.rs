//! Capability traits shared by the adapter types in [`adapters`](super::adapters).
//!
//! Each trait describes an access discipline rather than a storage strategy, so code written
//! against [`Stack`], [`Queue`] or [`Deque`] works the same whichever backing was chosen.

mod deque;
mod queue;
mod stack;

pub use deque::*;
pub use queue::*;
pub use stack::*;
