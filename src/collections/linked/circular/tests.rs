#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::{EmptyStructure, PositionError, PositionOutOfBounds};

#[test]
fn test_ring_traversal() {
    let mut list = CircularLinkedList::new();
    list.insert(1, 10);
    list.insert(2, 20);
    list.insert(3, 30);
    list.verify_ring();

    assert_eq!(list.to_string(), "10 -> 20 -> 30 -> (head)");

    let head = list.head().expect("list isn't empty");
    let mut curr = head;
    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(*list.get(curr).expect("node is in the ring"));
        curr = list.successor(curr).expect("every node has a successor");
    }
    assert_eq!(seen, [10, 20, 30]);
    assert_eq!(curr, head, "Exactly three hops should return to the head.");
}

#[test]
fn test_single_node_links_to_itself() {
    let mut list = CircularLinkedList::new();
    list.push_back("only");
    let head = list.head().expect("list isn't empty");
    assert_eq!(list.successor(head), Some(head));
    list.verify_ring();

    assert_eq!(list.remove(1), "only");
    assert_eq!(list.head(), None, "Removing the only node should empty the ring.");
    assert_eq!(list.to_string(), "(empty)");
    list.verify_ring();
}

#[test]
fn test_insert_and_remove_rewire_ring() {
    let mut list = CircularLinkedList::from_iter([2, 4, 6]);
    list.verify_ring();

    list.insert(1, 1);
    list.verify_ring();
    list.insert(3, 3);
    list.push_back(7);
    list.verify_ring();
    assert_eq!(list.to_vec(), [1, 2, 3, 4, 6, 7]);
    assert_eq!(list.front(), Some(&1));

    assert_eq!(list.remove(1), 1, "Removing the head should rewire the tail to the new head.");
    list.verify_ring();
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.remove(5), 7);
    list.verify_ring();
    assert_eq!(list.remove(2), 3);
    list.verify_ring();
    assert_eq!(list.to_vec(), [2, 4, 6]);

    list.push_front(0);
    assert_eq!(list.to_vec(), [0, 2, 4, 6]);
    list.verify_ring();
}

#[test]
fn test_position_errors() {
    let mut list = CircularLinkedList::from_iter([1, 2]);

    assert_eq!(
        list.try_insert(4, 0),
        Err(PositionError::PositionOutOfBounds(PositionOutOfBounds { position: 4, len: 2 }))
    );
    assert!(list.try_insert(0, 0).is_err_and(|e| e.is_invalid_position()));
    assert!(list.try_remove(3).is_err_and(|e| e.is_position_out_of_bounds()));
    assert_eq!(list.to_vec(), [1, 2], "Failed operations shouldn't modify the ring.");
    list.verify_ring();

    let mut empty = CircularLinkedList::<u8>::new();
    assert_eq!(empty.try_remove(1), Err(EmptyStructure::LIST.into()));
    assert!(empty.try_insert(2, 0).is_err(), "Only position 1 is valid in an empty ring.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let list = CircularLinkedList::from_iter(std::iter::repeat_with(|| counter.clone()).take(6));
    assert_eq!(list.len(), 6);

    drop(list);
    assert_eq!(counter.dropped(), 6, "Every node in the ring should be released on drop.");
}
