use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box<T> and then only ever handled through raw pointers until
// they are turned back into a Box to be freed. Holding a real Box in the chain would assert
// uniqueness every time it moved, invalidating every back link pointing at it.
//
// Ownership follows the `next` edge by convention: a node is freed only by whoever unlinks it from
// its predecessor (or from the list's head). `prev` links are never used to free anything.

/// A pointer to a node allocated by a list. A NodeRef is only ever held by the list that allocated
/// it, and only for nodes that are still linked into that list, so the accessors below always point
/// at a live node.
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` onto the heap and leaks it, returning a pointer to the allocation.
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation behind this pointer, returning the node by value.
    ///
    /// # Safety
    /// The node must still be live, and no copy of this pointer may be used afterwards. The caller
    /// is responsible for unlinking it from its neighbours.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that it
        // hasn't been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: A NodeRef always points at a live node, see the type's docs.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: As above.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: As above. The write goes through the raw pointer, so no reference to the node is
        // created.
        unsafe { (*self.0.as_ptr()).prev = prev; }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: As above.
        unsafe { (*self.0.as_ptr()).next = next; }
    }

    /// Returns a reference to the node's value. The caller binds the lifetime to a borrow of the
    /// list that owns the node.
    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live for as long as the owning list keeps it linked, which the caller
        // ensures by tying 'a to a borrow of that list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// Returns a mutable reference to the node's value. The caller binds the lifetime to a mutable
    /// borrow of the list that owns the node.
    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As for value, and the mutable borrow of the list prevents any other reference to
        // the value from existing at the same time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> Debug for NodeRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:p})", self.0)
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
