#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::DEFAULT_CAP;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut list = ArrayList::new();
    assert_eq!(list.cap(), DEFAULT_CAP);

    for i in 0..=DEFAULT_CAP {
        list.push(i);
    }

    assert_eq!(
        list.cap(),
        DEFAULT_CAP * 2,
        "Capacity should double when pushing past the default."
    );
    for i in 0..=DEFAULT_CAP {
        assert_eq!(
            *list.get(i), i,
            "All elements should survive growth in insertion order."
        );
    }

    let mut list = ArrayList::with_cap(0);
    list.push('a');
    assert!(list.cap() >= 1, "A zero capacity list should still grow.");
    assert_eq!(list[0], 'a');
}

#[test]
fn test_insert() {
    let mut list: ArrayList<_> = (0..3).collect();
    list.insert(0, 10);
    list.insert(2, 20);
    list.insert(5, 30);

    assert_eq!(list, [10, 0, 20, 1, 2, 30].into_iter().collect());

    let mut full = ArrayList::with_cap(2);
    full.push(1);
    full.push(2);
    full.insert(1, 3);
    assert_eq!(full.cap(), 4, "Inserting into a full list should grow it.");
    assert_eq!(full, [1, 3, 2].into_iter().collect());
}

#[test]
fn test_remove() {
    let mut list: ArrayList<_> = "abcde".chars().collect();

    assert_eq!(list.remove(0), 'a');
    assert_eq!(list.remove(3), 'e');
    assert_eq!(list.remove(1), 'c');
    assert_eq!(list, "bd".chars().collect());
    assert_eq!(list.cap(), DEFAULT_CAP, "Removal should never shrink the buffer.");
    assert!(
        list.buf.slot(2).is_none(),
        "The vacated trailing slot should be cleared."
    );
}

#[test]
fn test_out_of_bounds() {
    let mut list: ArrayList<_> = (0..4).collect();
    let before = list.clone();

    assert_eq!(list.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(
        list.try_insert(5, 100),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 }))
    );
    assert_eq!(list, before, "Rejected calls should leave the list unchanged.");

    assert_panics!({
        list.get(10);
    });
    assert_panics!({
        ArrayList::<u8>::new().remove(0);
    });
    assert_eq!(list.len(), 4);
}

#[test]
fn test_drop_on_removal() {
    let counter = CountedDrop::new();
    let mut list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(5).collect();

    drop(list.remove(2));
    assert_eq!(counter.count(), 1, "Removed value should be dropped by the caller only.");

    list.clear();
    assert_eq!(counter.count(), 5, "Clearing should drop every remaining element.");
    assert!(list.is_empty());
    assert_eq!(list.cap(), DEFAULT_CAP);

    list.extend(iter::repeat_with(|| counter.clone()).take(3));
    drop(list);
    assert_eq!(counter.count(), 8, "Dropping the list should drop its elements.");
}

#[test]
fn test_get_mut() {
    let mut list: ArrayList<_> = (0..3).collect();
    *list.get_mut(1) = 50;
    list[2] += 1;
    assert_eq!(format!("{list}"), "[0, 50, 3]");
}

proptest! {
    #[test]
    fn prop_push_preserves_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list = ArrayList::new();
        for value in values.iter() {
            list.push(*value);
        }

        prop_assert_eq!(list.len(), values.len());
        prop_assert!(list.cap() >= list.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i), value);
        }
    }

    #[test]
    fn prop_insert_remove_matches_model(
        ops in prop::collection::vec((any::<bool>(), any::<usize>(), any::<u16>()), 0..64)
    ) {
        let mut list = ArrayList::with_cap(1);
        let mut model = std::collections::VecDeque::new();

        for (insert, index, value) in ops {
            if insert {
                let index = index % (model.len() + 1);
                list.insert(index, value);
                model.insert(index, value);
            } else if !model.is_empty() {
                let index = index % model.len();
                prop_assert_eq!(Some(list.remove(index)), model.remove(index));
            }
        }

        prop_assert_eq!(list.len(), model.len());
        for (i, value) in model.iter().enumerate() {
            prop_assert_eq!(list.get(i), value);
        }
    }
}
