//! Helpers for tests that need to observe when values are dropped.

use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when it is dropped. Clones share the same counter, so
/// a collection of clones reports how many of its elements have been released.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of drops observed so far, across every clone of this value.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
