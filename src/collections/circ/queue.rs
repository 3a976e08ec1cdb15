use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use crate::collections::contiguous::DEFAULT_CAP;
use crate::collections::contiguous::buffer::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A first-in, first-out queue stored in a ring. Elements are written at `rear` and read from
/// `front`, with both wrapping around the end of the buffer, so neither end ever has to move the
/// rest of the elements.
///
/// When the ring is full, it is doubled and straightened out: the oldest element is moved to the
/// start of the new buffer and the rest follow it in order.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the queue is full, `enqueue` has to grow it first, taking `O(n)`.
pub struct CircularQueue<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a new, empty CircularQueue with a capacity of [`DEFAULT_CAP`].
    pub fn new() -> CircularQueue<T> {
        CircularQueue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty CircularQueue which can hold `cap` elements before growing.
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        CircularQueue {
            buf: Buffer::new(cap),
            front: 0,
            rear: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the queue can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Adds `value` to the back of the queue.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::circ::CircularQueue;
    /// let mut queue = CircularQueue::new();
    /// queue.enqueue("apple");
    /// queue.enqueue("banana");
    /// assert_eq!(queue.dequeue(), "apple");
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).throw()
    }

    /// Adds `value` to the back of the queue, returning an [`Err`] rather than panicking if the
    /// queue can't grow.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.buf.reserve_one(self.front, self.len)? {
            self.front = 0;
            self.rear = self.len;
        }

        self.buf.put(self.rear, value);
        self.rear = (self.rear + 1) % self.cap();
        self.len += 1;
        Ok(())
    }

    /// Removes the oldest element from the queue and returns it.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    /// Removes the oldest element from the queue and returns it, or an [`Err`] if the queue is
    /// empty.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        let value = self.buf.take(self.front).unreachable();
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the oldest element in the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a reference to the oldest element in the queue, or an [`Err`] if the queue is
    /// empty.
    pub fn try_peek(&self) -> Result<&T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }
        Ok(self.buf.slot(self.front).unreachable())
    }

    /// Drops every element in the queue, keeping the current capacity.
    pub fn clear(&mut self) {
        let dropped = self.buf.clear();
        debug!(dropped, "cleared circular queue");
        self.front = 0;
        self.rear = 0;
        self.len = 0;
    }

    /// Returns the buffer index of the element `offset` places behind the front.
    pub(crate) fn wrap_index(&self, offset: usize) -> usize {
        (self.front + offset) % self.cap()
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut queue = CircularQueue::new();
        queue.extend(value);
        queue
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        CircularQueue {
            buf: self.buf.clone(),
            front: self.front,
            rear: self.rear,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    /// Queues are equal if they hold the same elements in the same order, regardless of where in
    /// their rings those elements are stored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (0..self.len).all(|i| {
                self.buf.slot(self.wrap_index(i)) == other.buf.slot(other.wrap_index(i))
            })
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("slots", &self.buf)
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("len", &self.len)
            .finish()
    }
}
