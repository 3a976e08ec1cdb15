//! Error types shared by every collection in this crate. Each failure is its own struct (often a
//! ZST) implementing [`Error`](std::error::Error), with enums over them where one method can fail
//! in more than one way.

use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index-based accessor or mutator was given an index outside of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the call.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

/// An element was requested from the end of a collection that doesn't contain any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyContainer;

/// Growing a collection would require more capacity than can be represented or allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Returned by insertions which have to both check an index and possibly grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
