#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::{EmptyStructure, InvalidPosition, PositionError, PositionOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_at_position() {
    let mut list = SinglyLinkedList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_back(30);
    list.insert(3, 15);

    assert_eq!(
        list.to_vec(),
        [10, 20, 15, 30],
        "Inserting at position 3 should place the value before the old third element."
    );

    list.push_front(5);
    list.insert(6, 40);
    assert_eq!(list.to_vec(), [5, 10, 20, 15, 30, 40]);
    assert_eq!(list.len(), 6);
    assert_eq!(list.front(), Some(&5));
}

#[test]
fn test_position_errors() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);

    assert_eq!(
        list.try_insert(0, 9),
        Err(PositionError::InvalidPosition(InvalidPosition { position: 0 }))
    );
    assert_eq!(
        list.try_insert(5, 9),
        Err(PositionError::PositionOutOfBounds(PositionOutOfBounds { position: 5, len: 3 })),
        "Inserting further than one past the end should fail."
    );
    assert_eq!(
        list.try_remove(4),
        Err(PositionError::PositionOutOfBounds(PositionOutOfBounds { position: 4, len: 3 }))
    );
    assert!(list.try_remove(0).is_err_and(|e| e.is_invalid_position()));
    assert_eq!(list.to_vec(), [1, 2, 3], "Failed operations shouldn't modify the list.");

    let mut empty = SinglyLinkedList::<u8>::new();
    assert_eq!(empty.try_remove(1), Err(EmptyStructure::LIST.into()));
    assert_eq!(empty.try_remove_front(), Err(EmptyStructure::LIST));
    assert_eq!(EmptyStructure::LIST.to_string(), "list is empty");

    assert_panics!({ list.insert(0, 1) });
    assert_panics!({ list.remove(10) }, "out of bounds");
}

#[test]
fn test_remove() {
    let mut list = SinglyLinkedList::from_iter(1..=5);

    assert_eq!(list.remove(1), 1);
    assert_eq!(list.remove(2), 3);
    assert_eq!(list.remove(3), 5, "Removing the last position should work.");
    assert_eq!(list.to_vec(), [2, 4]);
    assert_eq!(list.try_remove_front(), Ok(2));
    assert_eq!(list.pop_front(), Some(4));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_back_and_positional_access() {
    let mut list = SinglyLinkedList::from_iter([4, 8, 15]);
    assert_eq!(list.get(1), Some(&4));
    assert_eq!(list.get(3), Some(&15));
    assert_eq!(list.get(0), None, "Positions start at 1.");
    assert_eq!(list.get(4), None);

    if let Some(value) = list.get_mut(2) {
        *value = 16;
    }
    assert_eq!(list.to_vec(), [4, 16, 15]);

    assert_eq!(list.pop_back(), Some(15));
    assert_eq!(list.len(), 2);
    list.push_back(23);
    assert_eq!(list.to_vec(), [4, 16, 23], "The old tail link should have been cleared.");

    assert_eq!(list.try_remove_back(), Ok(23));
    assert_eq!(list.pop_back(), Some(16));
    assert_eq!(list.pop_back(), Some(4));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.try_remove_back(), Err(EmptyStructure::LIST));
    assert!(list.is_empty());
}

#[test]
fn test_reverse() {
    let mut list = SinglyLinkedList::from_iter(1..=4);
    list.reverse();
    assert_eq!(list.to_vec(), [4, 3, 2, 1]);

    let mut single = SinglyLinkedList::from_iter([7]);
    single.reverse();
    assert_eq!(single.to_vec(), [7]);

    let mut empty = SinglyLinkedList::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_iterators_and_display() {
    let mut list = SinglyLinkedList::from_iter([10, 20, 30]);
    for value in list.iter_mut() {
        *value += 1;
    }

    assert_eq!(list.to_string(), "11 -> 21 -> 31 -> NULL");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "NULL");
    assert_eq!(list.iter().len(), 3);
    assert_eq!(list.index_of(&21), Some(2), "Positions reported should be 1-based.");
    assert!(list.contains(&31));
    assert!(!list.contains(&30));
    assert_eq!(list.clone(), list);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [11, 21, 31]);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.push_front(counter.clone());
    }
    drop(list.remove(4));
    assert_eq!(counter.dropped(), 1);

    drop(list);
    assert_eq!(counter.dropped(), 10, "Every remaining node should be released on drop.");
}

#[test]
fn test_long_list_drop() {
    let list = SinglyLinkedList::from_iter(0..200_000);
    assert_eq!(list.len(), 200_000);
    drop(list);
}

proptest! {
    #[test]
    fn prop_inserts_match_vec_model(ops in prop::collection::vec((0_usize..40, any::<i32>()), 0..60)) {
        let mut list = SinglyLinkedList::new();
        let mut model = Vec::new();

        for (position, value) in ops {
            let result = list.try_insert(position, value);
            if position >= 1 && position <= model.len() + 1 {
                prop_assert!(result.is_ok());
                model.insert(position - 1, value);
            } else {
                prop_assert!(result.is_err());
            }
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.to_vec(), model);
    }

    #[test]
    fn prop_double_reverse_is_identity(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut list = SinglyLinkedList::from_iter(values.iter().copied());
        list.reverse();
        list.reverse();
        prop_assert_eq!(list.to_vec(), values);
    }
}
