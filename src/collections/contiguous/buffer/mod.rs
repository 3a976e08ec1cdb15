//! The slot storage shared by every contiguous and circular collection.

mod buffer;

pub(crate) use buffer::*;
