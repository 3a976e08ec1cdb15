//! This crate is my attempt at writing a handful of the classic collections from first principles:
//! a growable array list, a doubly linked list, a circular queue and an array-backed stack.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation for it to be used in production. Writing
//! these data structures helps me to understand how their growth policies and linking actually
//! behave, rather than just knowing their complexity tables.
//!
//! # Error Handling
//! Every fallible operation has a panicking form and a `try_` form. The panicking form is more
//! ergonomic for the common case where the caller has already checked the index or length, while
//! the `try_` form returns a strongly typed error. Errors are structs (often ZSTs) that implement
//! [`Error`](std::error::Error), with enums for static dispatch where a method can fail in more
//! than one way. Validation always happens before mutation, so an error leaves the collection as it
//! was.
//!
//! # Logging
//! Growth and clearing are reported through [`tracing`] at `trace` and `debug` level. The library
//! never installs a subscriber, that is left to the binary using it.
//!
//! # Features
//! Each family of collections sits behind a feature: `contiguous` ([`ArrayList`] and
//! [`ArrayStack`]), `linked` ([`DoublyLinkedList`]) and `circ` ([`CircularQueue`]). All of them are
//! enabled by default through `collections-all`.
//!
//! [`ArrayList`]: collections::contiguous::ArrayList
//! [`ArrayStack`]: collections::contiguous::ArrayStack
//! [`DoublyLinkedList`]: collections::linked::DoublyLinkedList
//! [`CircularQueue`]: collections::circ::CircularQueue

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
