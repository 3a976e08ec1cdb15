//! A module containing [`ArrayStack`].
//!
//! [`ArrayStack`] is also re-exported under the parent module.

mod stack;
mod tests;

pub use stack::*;
