use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::super::DEFAULT_CAP;
use super::super::buffer::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A last-in, first-out stack over a contiguous buffer. Grows the same way as
/// [`ArrayList`](super::super::ArrayList), by doubling its capacity when full.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* Growing takes `O(n)`.
pub struct ArrayStack<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> ArrayStack<T> {
    /// Creates a new, empty ArrayStack with a capacity of [`DEFAULT_CAP`].
    pub fn new() -> ArrayStack<T> {
        ArrayStack::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArrayStack which can hold `cap` elements before growing.
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            buf: Buffer::new(cap),
            len: 0,
        }
    }

    /// Returns the number of elements on the stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the stack can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayStack;
    /// let mut stack = ArrayStack::new();
    /// stack.push("apple");
    /// stack.push("banana");
    /// assert_eq!(stack.peek(), &"banana");
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes `value` onto the top of the stack, returning an [`Err`] rather than panicking if the
    /// stack can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.buf.reserve_one(0, self.len)?;
        self.buf.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Removes the top element of the stack and returns it.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes the top element of the stack and returns it, or an [`Err`] if the stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayStack;
    /// # use custom_collections::collections::EmptyContainer;
    /// let mut stack: ArrayStack<_> = (0..2).collect();
    /// assert_eq!(stack.try_pop(), Ok(1));
    /// assert_eq!(stack.try_pop(), Ok(0));
    /// assert_eq!(stack.try_pop(), Err(EmptyContainer));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }
        // Decrement len before taking.
        self.len -= 1;
        Ok(self.buf.take(self.len).unreachable())
    }

    /// Returns a reference to the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a reference to the top element of the stack, or an [`Err`] if the stack is empty.
    /// Never changes the stack.
    pub fn try_peek(&self) -> Result<&T, EmptyContainer> {
        match self.len.checked_sub(1) {
            Some(top) => Ok(self.buf.slot(top).unreachable()),
            None => Err(EmptyContainer),
        }
    }

    /// Drops every element on the stack, keeping the current capacity.
    pub fn clear(&mut self) {
        let dropped = self.buf.clear();
        debug!(dropped, "cleared array stack");
        self.len = 0;
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut stack = ArrayStack::new();
        stack.extend(value);
        stack
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        ArrayStack {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (0..self.len).all(|i| self.buf.slot(i) == other.buf.slot(i))
    }
}

impl<T: Eq> Eq for ArrayStack<T> {}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("slots", &self.buf)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
