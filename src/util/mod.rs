//! Internal helpers and the crate-wide error types.

#[cfg(test)]
pub(crate) mod alloc;
pub mod error;
#[cfg(test)]
pub(crate) mod panic;
pub(crate) mod result;
