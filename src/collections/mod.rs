//! Generic collection types, each with its own storage strategy.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, and the way ownership
//! works out for each of them: a buffer of slots for the contiguous and circular types, and a chain
//! of owned nodes with raw back links for the linked type.
//!
//! # Errors
//! Every method which can fail comes in two forms. `try_x` returns a [`Result`] with one of the
//! error types below, while `x` panics with the error's message. A failed call never changes the
//! collection.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOrCapOverflow, IndexOutOfBounds};
