use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::super::DEFAULT_CAP;
use super::super::buffer::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A variable size list stored in a single contiguous buffer, which doubles in capacity whenever it
/// runs out of room.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `clear` | `O(cap)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct ArrayList<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::{ArrayList, DEFAULT_CAP};
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(3);
    /// list.extend([1_u8, 2, 3]);
    /// assert_eq!(list.cap(), 3);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList {
            buf: Buffer::new(cap),
            len: 0,
        }
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the ArrayList can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Appends the provided value to the end of the ArrayList, doubling the capacity if required.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..=5 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list.get(5), &5);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Appends the provided value to the end of the ArrayList, returning an [`Err`] rather than
    /// panicking if the ArrayList can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.buf.reserve_one(0, self.len)?;
        self.buf.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Inserts the provided value at `index`, moving all following elements one place to the
    /// right. An `index` equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index > len` or if the ArrayList would need to grow past its maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..3).collect();
    /// list.insert(1, 100);
    /// list.insert(4, 200);
    /// assert_eq!(list, [0, 100, 1, 2, 200].into_iter().collect());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] on a failure rather than
    /// panicking. The ArrayList is unchanged if an error is returned.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }
        self.buf.reserve_one(0, self.len)?;

        for i in (index..self.len).rev() {
            self.buf.shift(i, i + 1);
        }
        self.buf.put(index, value);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let index = self.check_index(index)?;
        Ok(self.buf.slot(index).unreachable())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let index = self.check_index(index)?;
        Ok(self.buf.slot_mut(index).unreachable())
    }

    /// Removes and returns the element at `index`, moving all following elements one place to the
    /// left. The capacity is never reduced.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello".chars().collect();
    /// assert_eq!(list.remove(1), 'e');
    /// assert_eq!(list, "Hllo".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let index = self.check_index(index)?;

        let removed = self.buf.take(index).unreachable();
        // Close the gap, the last shift leaves the trailing slot empty.
        for i in index + 1..self.len {
            self.buf.shift(i, i - 1);
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Drops every element in the ArrayList, keeping the current capacity.
    pub fn clear(&mut self) {
        let dropped = self.buf.clear();
        debug!(dropped, "cleared array list");
        self.len = 0;
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<usize, IndexOutOfBounds> {
        if index < self.len {
            Ok(index)
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList::with_cap(iter.size_hint().0.max(DEFAULT_CAP));
        list.extend(iter);
        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        ArrayList {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (0..self.len).all(|i| self.buf.slot(i) == other.buf.slot(i))
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&Contents(self), f)
    }
}

/// Formats only the live elements of an ArrayList, as a list.
struct Contents<'a, T>(&'a ArrayList<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.0.len).filter_map(|i| self.0.buf.slot(i)))
            .finish()
    }
}
