//! Linked collection types. Currently just [`DoublyLinkedList`].

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
