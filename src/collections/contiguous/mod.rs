//! Contiguous collection types. [`ArrayList`] for an indexed list and [`ArrayStack`] for a
//! last-in, first-out stack, both of which double their capacity when they run out of room.
#![warn(missing_docs)]

pub mod array_list;
pub(crate) mod buffer;
pub mod stack;

#[doc(inline)]
pub use array_list::ArrayList;
#[doc(inline)]
pub use stack::ArrayStack;

/// The capacity given to contiguous collections created without a capacity hint.
pub const DEFAULT_CAP: usize = 10;
