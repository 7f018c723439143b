//! Error types shared by every collection in the crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A position of `0` was provided. Positions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition {
    pub position: usize,
}

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid position {}, positions start at 1!", self.position)
    }
}

impl Error for InvalidPosition {}

/// A position past the end of the structure was provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOutOfBounds {
    pub position: usize,
    pub len: usize,
}

impl Display for PositionOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} out of bounds for collection with {} elements!",
            self.position, self.len
        )
    }
}

impl Error for PositionOutOfBounds {}

/// The kind of structure that an [`EmptyStructure`] error originated from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum StructureKind {
    #[display("list")]
    List,
    #[display("stack")]
    Stack,
    #[display("queue")]
    Queue,
    #[display("deque")]
    Deque,
}

/// An element was requested from a structure that holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStructure {
    pub kind: StructureKind,
}

impl EmptyStructure {
    pub const LIST: EmptyStructure = EmptyStructure { kind: StructureKind::List };
    pub const STACK: EmptyStructure = EmptyStructure { kind: StructureKind::Stack };
    pub const QUEUE: EmptyStructure = EmptyStructure { kind: StructureKind::Queue };
    pub const DEQUE: EmptyStructure = EmptyStructure { kind: StructureKind::Deque };
}

impl Display for EmptyStructure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} is empty", self.kind)
    }
}

impl Error for EmptyStructure {}

/// Any of the ways a positional insert or removal can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    InvalidPosition(InvalidPosition),
    PositionOutOfBounds(PositionOutOfBounds),
    EmptyStructure(EmptyStructure),
}

/// A value equal to one already in the tree was inserted while duplicates are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedDuplicate;

impl Display for RejectedDuplicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value is already present and duplicates are rejected!")
    }
}

impl Error for RejectedDuplicate {}

/// An operation that requires a terminated chain of nodes was given one that loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetected;

impl Display for CycleDetected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Chain of nodes contains a cycle!")
    }
}

impl Error for CycleDetected {}

/// Any of the ways linking the tail of a chain back into the chain can fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CloseCycleError {
    InvalidPosition(InvalidPosition),
    PositionOutOfBounds(PositionOutOfBounds),
    CycleDetected(CycleDetected),
}
