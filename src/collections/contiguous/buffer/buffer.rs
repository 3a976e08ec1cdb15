use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use tracing::trace;

use crate::util::error::CapacityOverflow;

pub(crate) const MIN_CAP: usize = 2;
pub(crate) const MAX_CAP: usize = isize::MAX as usize;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// A fixed-size run of slots which may or may not hold a value, forming the backing storage of
/// every contiguous collection in this crate. Slots are cleared (set to [`None`]) as soon as their
/// value leaves the collection, so that each value is dropped exactly when it is logically removed.
///
/// A Buffer never changes size in place. Growing builds a complete replacement and only then swaps
/// it in, so no partially copied state is ever visible.
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with `cap` empty slots.
    pub fn new(cap: usize) -> Buffer<T> {
        Buffer {
            slots: (0..cap).map(|_| None).collect(),
        }
    }

    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the value in the slot at `index`, if there is one.
    ///
    /// # Panics
    /// Panics if `index >= cap`. Callers always pass indices they have already bounded.
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots[index].as_ref()
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[index].as_mut()
    }

    /// Writes `value` into the slot at `index`, returning whatever was there before.
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    /// Moves the value out of the slot at `index`, leaving it empty.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Moves the contents of `from` into the slot at `to`, leaving `from` empty.
    pub fn shift(&mut self, from: usize, to: usize) {
        let value = self.slots[from].take();
        self.slots[to] = value;
    }

    /// Drops every value held in the Buffer, without changing its capacity. Returns the number of
    /// values dropped.
    pub fn clear(&mut self) -> usize {
        let mut dropped = 0;
        for slot in self.slots.iter_mut() {
            if slot.take().is_some() {
                dropped += 1;
            }
        }
        dropped
    }

    /// Calculates the capacity that the next growth should produce.
    pub fn grown_cap(&self) -> Result<usize, CapacityOverflow> {
        grown_cap_for(self.cap(), mem::size_of::<Option<T>>())
    }

    /// Grows the Buffer to twice its capacity, moving `len` values out of the ring starting at
    /// `start` and laying them out in order from slot 0 of the new Buffer. Contiguous collections
    /// pass a `start` of 0. Nothing is changed if the new capacity can't be represented.
    pub fn grow(&mut self, start: usize, len: usize) -> Result<(), CapacityOverflow> {
        let old_cap = self.cap();
        let new_cap = self.grown_cap()?;

        let mut grown = Buffer::new(new_cap);
        for i in 0..len {
            grown.slots[i] = self.slots[(start + i) % old_cap].take();
        }

        trace!(old_cap, new_cap, len, "grew buffer");

        *self = grown;
        Ok(())
    }

    /// Makes room for one more value when the `len` values starting at `start` fill every slot.
    /// Returns whether the Buffer grew, in which case the values now start at slot 0.
    pub fn reserve_one(&mut self, start: usize, len: usize) -> Result<bool, CapacityOverflow> {
        if len < self.cap() {
            return Ok(false);
        }
        self.grow(start, len)?;
        Ok(true)
    }
}

/// The capacity that a buffer of `cap` slots, each `slot_size` bytes wide, grows to. Zero sized
/// slots are counted as a byte each.
pub(crate) fn grown_cap_for(cap: usize, slot_size: usize) -> Result<usize, CapacityOverflow> {
    let new_cap = cap
        .checked_mul(GROWTH_FACTOR)
        .ok_or(CapacityOverflow)?;
    let new_cap = cmp::max(new_cap, MIN_CAP);

    // Layout for the new slots must not exceed isize::MAX bytes.
    match new_cap.checked_mul(cmp::max(slot_size, 1)) {
        Some(bytes) if bytes <= MAX_CAP => Ok(new_cap),
        _ => Err(CapacityOverflow),
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Buffer {
            slots: self.slots.clone(),
        }
    }
}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}
