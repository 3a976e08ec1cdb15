//! Circular collection types, stored in a ring that wraps around the end of its buffer. Currently
//! just [`CircularQueue`].

pub mod queue;
mod tests;

#[doc(inline)]
pub use queue::CircularQueue;
