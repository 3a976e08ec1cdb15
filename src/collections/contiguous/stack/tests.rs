#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::DEFAULT_CAP;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_fruit() {
    let mut stack = ArrayStack::new();
    stack.push("apple");
    stack.push("banana");
    stack.push("cherry");

    assert_eq!(stack.peek(), &"cherry");
    assert_eq!(stack.pop(), "cherry");
    assert_eq!(stack.pop(), "banana");
    assert!(!stack.is_empty());
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_growth() {
    let mut stack: ArrayStack<_> = (0..=DEFAULT_CAP).collect();
    assert_eq!(stack.cap(), DEFAULT_CAP * 2, "Capacity should double when full.");

    for i in (0..=DEFAULT_CAP).rev() {
        assert_eq!(stack.pop(), i, "Growth should keep the stack in order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_empty() {
    let mut stack = ArrayStack::<u8>::new();

    assert_eq!(stack.try_pop(), Err(EmptyContainer));
    assert_eq!(stack.try_peek(), Err(EmptyContainer));
    assert_eq!(stack.len(), 0, "Failed calls shouldn't change the length.");

    assert_panics!({
        stack.pop();
    });
    assert_panics!({
        stack.peek();
    });
}

#[test]
fn test_peek_is_idempotent() {
    let mut stack: ArrayStack<_> = (0..3).collect();
    for _ in 0..5 {
        assert_eq!(stack.peek(), &2);
    }
    assert_eq!(stack.len(), 3);
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.cap(), DEFAULT_CAP);
}

#[test]
fn test_drop_on_pop() {
    let counter = CountedDrop::new();
    let mut stack: ArrayStack<_> = iter::repeat_with(|| counter.clone()).take(4).collect();

    stack.pop();
    assert_eq!(counter.count(), 1, "A popped value should be released once it's dropped.");
    assert!(stack.buf.slot(3).is_none(), "The vacated slot should be cleared.");

    drop(stack);
    assert_eq!(counter.count(), 4, "Dropping the stack should drop the rest.");
}

proptest! {
    #[test]
    fn prop_lifo(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut stack = ArrayStack::with_cap(1);
        for value in values.iter() {
            stack.push(*value);
            prop_assert_eq!(stack.peek(), value);
        }
        for value in values.iter().rev() {
            prop_assert_eq!(stack.pop(), *value);
        }
        prop_assert_eq!(stack.try_pop(), Err(EmptyContainer));
    }
}
