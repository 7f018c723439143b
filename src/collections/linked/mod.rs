//! Linked collection types: [`SinglyLinkedList`], [`DoublyLinkedList`] and
//! [`CircularLinkedList`], plus the [`Arena`] that the latter two keep their nodes in.
//!
//! All three lists accept 1-based positions for their positional operations, and all of them
//! leave themselves untouched when such an operation fails.

pub mod arena;
pub mod circular;
pub mod doubly;
mod length;
pub(crate) mod position;
pub mod singly;

#[doc(inline)]
pub use arena::{Arena, NodeId};
#[doc(inline)]
pub use circular::CircularLinkedList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
pub(crate) use length::*;
#[doc(inline)]
pub use singly::SinglyLinkedList;
