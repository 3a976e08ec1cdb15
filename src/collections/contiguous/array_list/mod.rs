//! A module containing [`ArrayList`], a growable list over a single contiguous buffer.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;
mod tests;

pub use array_list::*;
