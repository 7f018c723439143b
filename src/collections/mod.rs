//! The collection types themselves.
//!
//! # Purpose
//! I wrote these to properly learn linked structures, rather than to compete with
//! [`std::collections`]. Each family lives behind its own feature, all of which are enabled by
//! default.
//!
//! # Method
//! Lists, adapters and the tree share the error types in [`error`](crate::error). The
//! [`chain`] module is the odd one out: it isn't a container so much as a workbench, a pool of
//! singly linked nodes that can be wired into any shape (cycles and shared tails included) for the
//! pointer-chasing algorithms to run over.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "chain")]
pub mod chain;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
