//! A module containing [`DoublyLinkedList`] and the node type it is built from.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod doubly_linked_list;
mod node;

pub use doubly_linked_list::*;
pub(crate) use node::*;
