//! This crate is a toolkit of linked linear containers and the textbook algorithms that go with
//! them.
//!
//! # Purpose
//! These types started out as exercises: singly, doubly and circular linked lists with 1-based
//! positional insertion and removal, the stack / queue / deque adapters that sit on top of them,
//! the pointer-chasing problems that everyone meets sooner or later (Floyd's cycle detection,
//! reversal, rotation, merge sort) and a small binary search tree. Writing them properly, with
//! real error types and no unsafe pointer juggling, is the point.
//!
//! # Method
//! Structures with back-references (the doubly linked list, the circular list and the free-form
//! node graph the algorithms run on) keep their nodes in an [`Arena`](collections::linked::Arena)
//! and link them by [`NodeId`](collections::linked::NodeId) rather than by pointer. The singly
//! linked list and the tree own their nodes through plain [`Box`]es, since nothing ever points
//! backwards in them.
//!
//! # Error Handling
//! Fallible operations return strongly typed errors: small structs that implement
//! [`Error`](std::error::Error), grouped by enums where an operation can fail in more than one
//! way. Failed operations never modify the structure they were called on. Where it is more
//! ergonomic, a panicking counterpart (`insert` next to `try_insert`) is provided as well.
//!
//! # Logging
//! Rejected operations and algorithm milestones are reported through [`tracing`] events. The
//! crate never installs a subscriber.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![forbid(unsafe_code)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod config;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
