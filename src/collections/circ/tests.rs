#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::queue::*;
use crate::collections::contiguous::DEFAULT_CAP;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_fruit() {
    let mut queue = CircularQueue::new();
    queue.enqueue("apple");
    queue.enqueue("banana");
    queue.enqueue("cherry");

    assert_eq!(queue.peek(), &"apple");
    assert_eq!(queue.dequeue(), "apple");
    assert_eq!(queue.dequeue(), "banana");
    assert!(!queue.is_empty());
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_wrap() {
    let mut queue = CircularQueue::with_cap(4);
    queue.extend(0..3);
    assert_eq!(queue.dequeue(), 0);
    assert_eq!(queue.dequeue(), 1);

    queue.extend(3..6);
    assert_eq!(queue.cap(), 4, "Wrapping into free slots shouldn't grow the queue.");
    assert_eq!(queue.rear, 2, "The rear should have wrapped past the end of the buffer.");
    assert_eq!(queue.front, 2);
}

#[test]
fn test_growth_linearizes() {
    let mut queue = CircularQueue::with_cap(4);
    queue.extend(0..4);
    queue.dequeue();
    queue.dequeue();
    // Fill the two freed slots at the start of the buffer, wrapping the ring.
    queue.extend(4..6);
    assert_eq!((queue.front, queue.rear, queue.len()), (2, 2, 4));

    queue.enqueue(6);
    assert_eq!(queue.cap(), 8, "A full queue should double.");
    assert_eq!(queue.front, 0, "Growth should move the oldest element to the start.");
    assert_eq!(queue.rear, 5);

    for i in 2..=6 {
        assert_eq!(queue.dequeue(), i, "FIFO order should survive growth across the wrap.");
    }
    assert!(queue.is_empty());
}

#[test]
fn test_empty() {
    let mut queue = CircularQueue::<u8>::new();

    assert_eq!(queue.try_dequeue(), Err(EmptyContainer));
    assert_eq!(queue.try_peek(), Err(EmptyContainer));
    assert_eq!(queue.len(), 0);

    assert_panics!({
        queue.dequeue();
    });
    assert_panics!({
        queue.peek();
    });

    let mut queue = CircularQueue::with_cap(0);
    queue.enqueue(1_u8);
    assert_eq!(queue.dequeue(), 1, "A zero capacity queue should still grow.");
}

#[test]
fn test_equality() {
    let mut wrapped = CircularQueue::with_cap(3);
    wrapped.extend([9, 9, 1]);
    wrapped.dequeue();
    wrapped.dequeue();
    wrapped.extend([2, 3]);

    let straight: CircularQueue<_> = (1..=3).collect();
    assert_eq!(
        wrapped, straight,
        "Equality should follow logical order rather than ring layout."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut queue: CircularQueue<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    queue.dequeue();
    assert_eq!(counter.count(), 1);
    assert!(queue.buf.slot(0).is_none(), "The dequeued slot should be cleared.");

    queue.clear();
    assert_eq!(counter.count(), 6, "Clearing should drop every element.");
    assert_eq!(queue.cap(), DEFAULT_CAP);

    queue.extend(iter::repeat_with(|| counter.clone()).take(2));
    drop(queue);
    assert_eq!(counter.count(), 8);
}

proptest! {
    #[test]
    fn prop_fifo(ops in prop::collection::vec(prop::option::of(any::<u32>()), 0..200)) {
        let mut queue = CircularQueue::with_cap(2);
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Some(value) => {
                    queue.enqueue(value);
                    model.push_back(value);
                },
                None => {
                    prop_assert_eq!(queue.try_dequeue().ok(), model.pop_front());
                },
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.try_peek().ok(), model.front());
        }
    }
}
