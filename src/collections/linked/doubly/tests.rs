#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::{EmptyStructure, PositionError, PositionOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_at_position() {
    let mut list = DoublyLinkedList::new();
    list.insert(1, 10);
    list.insert(2, 20);
    list.insert(3, 30);
    list.verify_links();
    assert_eq!(list.to_vec(), [10, 20, 30]);
    assert_eq!(list.to_string(), "10 -> 20 -> 30 -> NULL");

    list.insert(1, 5);
    list.insert(3, 15);
    list.insert(6, 40);
    list.verify_links();
    assert_eq!(
        list.to_vec(),
        [5, 10, 15, 20, 30, 40],
        "Inserts at the front, middle and one past the back should all keep order."
    );
    assert_eq!(list.back(), Some(&40), "Inserting at len + 1 should move the tail.");

    assert_eq!(
        list.try_insert(8, 0),
        Err(PositionError::PositionOutOfBounds(PositionOutOfBounds { position: 8, len: 6 }))
    );
    assert!(list.try_insert(0, 0).is_err_and(|e| e.is_invalid_position()));
    assert_eq!(list.len(), 6, "Failed inserts shouldn't change the length.");
    assert_panics!({ list.insert(0, 0) }, "positions start at 1");
}

#[test]
fn test_remove_relinks_neighbours() {
    let mut list = DoublyLinkedList::from_iter(1..=6);

    assert_eq!(list.remove(1), 1);
    list.verify_links();
    assert_eq!(list.remove(5), 6, "Removing the last position should move the tail back.");
    list.verify_links();
    assert_eq!(list.remove(2), 3);
    list.verify_links();
    assert_eq!(list.to_vec(), [2, 4, 5]);
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.back(), Some(&5));

    assert!(list.try_remove(4).is_err_and(|e| e.is_position_out_of_bounds()));
    assert_eq!(list.to_vec(), [2, 4, 5]);

    list.clear();
    assert_eq!(list.try_remove(1), Err(EmptyStructure::LIST.into()));
    assert_eq!(list.try_remove_front(), Err(EmptyStructure::LIST));
    list.verify_links();
}

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();

    assert_eq!(list.pop_front(), Some(1));
    list.verify_links();
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    list.verify_links();

    list.push_front(9);
    assert_eq!(list.front(), list.back(), "A single element is both front and back.");
}

#[test]
fn test_get_and_iterators() {
    let mut list = DoublyLinkedList::from_iter(0..10);

    for position in 1..=10 {
        assert_eq!(list.get(position), Some(&(position - 1)));
    }
    assert_eq!(list.get(0), None);
    assert_eq!(list.get(11), None);

    if let Some(value) = list.get_mut(8) {
        *value = 70;
    }
    assert_eq!(list.index_of(&70), Some(8));
    assert!(list.contains(&9));

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&9));
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.rev().copied().collect::<Vec<_>>(), [8, 70, 6, 5, 4, 3, 2, 1]);

    assert_eq!(list.clone(), list);
    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(9));
    assert_eq!(owned.next(), Some(0));
    assert_eq!(owned.len(), 8);
}

#[test]
fn test_slot_reuse_keeps_links() {
    let mut list = DoublyLinkedList::new();
    for round in 0..5 {
        for value in 0..8 {
            list.push_back(round * 10 + value);
        }
        for _ in 0..6 {
            list.remove(2);
            list.verify_links();
        }
    }
    assert_eq!(list.len(), 10);
    assert_eq!(list.nodes.len(), 10, "Removed nodes shouldn't linger in the arena.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut list = DoublyLinkedList::new();
    for _ in 0..10 {
        list.push_back(counter.clone());
    }
    drop(list.pop_back());
    assert_eq!(counter.dropped(), 1);

    drop(list);
    assert_eq!(counter.dropped(), 10, "Every remaining node should be released on drop.");
}
