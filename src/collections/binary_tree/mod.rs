//! An owned, unbalanced binary search tree.

mod binary_search_tree;
mod iterative;
mod node;
mod tests;

pub use binary_search_tree::*;
pub(crate) use node::*;
