use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::{Link, Node, NodeRef};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. Every node is owned by the list itself, the links
/// between nodes are plain pointers in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `clear` | `O(n)` |
///
/// Indexed methods walk from whichever end of the list is closer to the index, which is where the
/// `min(i, n-i)` comes from.
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

/// The direction and number of steps taken to reach an index from the nearest end of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk {
    FromHead(usize),
    FromTail(usize),
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new DoublyLinkedList containing only `value`.
    pub fn single(value: T) -> DoublyLinkedList<T> {
        let mut list = DoublyLinkedList::new();
        list.push_back(value);
        list
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| head.value())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| tail.value())
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::single(2);
    /// list.push_front(1);
    /// assert_eq!(list.to_string(), "(1) -> (2)");
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            None => self.tail = Some(node),
            Some(old_head) => old_head.set_prev(Some(node)),
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            None => self.head = Some(node),
            Some(old_tail) => old_tail.set_next(Some(node)),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: head is a live node owned by self, and it is unlinked below before anything else
        // can reach it.
        let old_head = unsafe { self.head?.take_node() };

        match old_head.next {
            Some(new_head) => new_head.set_prev(None),
            None => self.tail = None,
        }

        self.head = old_head.next;
        self.len -= 1;
        Some(old_head.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: As for pop_front, from the other end.
        let old_tail = unsafe { self.tail?.take_node() };

        match old_tail.prev {
            Some(new_tail) => new_tail.set_next(None),
            None => self.head = None,
        }

        self.tail = old_tail.prev;
        self.len -= 1;
        Some(old_tail.value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.seek(index).value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.seek(index).value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, moving the element previously there (and all
    /// following elements) back by one. An `index` equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert(1, 2);
    /// list.insert(3, 4);
    /// assert_eq!(list, (1..=4).collect());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        match index {
            0 => self.push_front(value),
            val if val == self.len => self.push_back(value),
            val => {
                // For this branch, we aren't adding at the front or back, so the node currently at
                // index has a predecessor.
                let next = self.seek(val);
                let prev = next.prev().unreachable();

                let node = NodeRef::from_node(Node {
                    value,
                    prev: Some(prev),
                    next: Some(next),
                });

                prev.set_next(Some(node));
                next.set_prev(Some(node));
                self.len += 1;
            },
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        Ok(match index {
            0 => self.pop_front().unreachable(),
            val if val == self.last_index() => self.pop_back().unreachable(),
            val => {
                // SAFETY: The node is live and owned by self. Its neighbours are relinked straight
                // away, so nothing can reach it afterwards.
                let removed = unsafe { self.seek(val).take_node() };

                // For this branch, both prev and next must be defined. Head and tail versions are
                // handled with pop front / back branches.
                let prev = removed.prev.unreachable();
                let next = removed.next.unreachable();

                prev.set_next(Some(next));
                next.set_prev(Some(prev));
                self.len -= 1;
                removed.value
            },
        })
    }

    /// Drops every element and resets the list to empty.
    pub fn clear(&mut self) {
        let dropped = self.unlink_all();
        debug!(dropped, "cleared linked list");
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn last_index(&self) -> usize {
        self.len - 1
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Decides how to reach `index`: forwards from the head if it lies in the first half of the
    /// list, otherwise backwards from the tail.
    pub(crate) const fn walk(&self, index: usize) -> Walk {
        if index < self.len / 2 {
            Walk::FromHead(index)
        } else {
            Walk::FromTail(self.last_index() - index)
        }
    }

    /// Returns the node at `index`, which must already be checked to be in bounds.
    pub(crate) fn seek(&self, index: usize) -> NodeRef<T> {
        match self.walk(index) {
            Walk::FromHead(steps) => {
                let mut node = self.head.unreachable();
                for _ in 0..steps {
                    node = node.next().unreachable();
                }
                node
            },
            Walk::FromTail(steps) => {
                let mut node = self.tail.unreachable();
                for _ in 0..steps {
                    node = node.prev().unreachable();
                }
                node
            },
        }
    }

    /// Walks the values from head to tail.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        iter::successors(self.head, |node| node.next()).map(|node| node.value())
    }

    /// Releases every node one at a time. Returns the number of nodes released.
    fn unlink_all(&mut self) -> usize {
        let mut released = 0;
        let mut link = self.head.take();
        while let Some(ptr) = link {
            // SAFETY: Each node is reached exactly once by following next links from the head,
            // and the list forgets all of them below.
            link = unsafe { ptr.take_node() }.next;
            released += 1;
        }
        self.tail = None;
        self.len = 0;
        released
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut link = self.head;
        while let Some(node) = link {
            assert!(node.prev() == prev, "Back link should point at the previous node.");
            prev = Some(node);
            link = node.next();
            count += 1;
        }
        assert!(prev == self.tail, "The last node should be the tail.");
        assert_eq!(count, self.len, "Walking the chain should visit len nodes.");
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

// SAFETY: The list uniquely owns all of its nodes and no NodeRef ever escapes it, so it can be sent
// to another thread whenever T can.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: The safe API obeys all rules of the borrow checker, so no interior mutability occurs
// through a shared reference.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.values().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}

struct Contents<'a, T>(&'a DoublyLinkedList<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}
