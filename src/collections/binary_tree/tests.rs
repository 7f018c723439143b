#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::config::{DuplicatePolicy, Traversal, TreeConfig};
use crate::util::alloc::DropCounter;
use crate::util::error::RejectedDuplicate;

fn sample() -> BinarySearchTree<i32> {
    BinarySearchTree::from_iter([5, 3, 7, 2, 4, 6, 8])
}

fn owned(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}

#[test]
fn test_traversal_orders() {
    let tree = sample();
    assert_eq!(owned(tree.in_order()), (2..=8).collect::<Vec<_>>());
    assert_eq!(owned(tree.pre_order()), [5, 3, 2, 4, 7, 6, 8]);
    assert_eq!(owned(tree.post_order()), [2, 4, 3, 6, 8, 7, 5]);
    assert_eq!(owned(tree.level_order()), [5, 3, 7, 2, 4, 6, 8]);
}

#[test]
fn test_recursive_and_iterative_agree() {
    let tree = BinarySearchTree::from_iter([50, 30, 70, 20, 40, 60, 80, 35, 45, 65, 10, 5]);
    assert_eq!(tree.in_order_recursive(), tree.in_order_iterative());
    assert_eq!(tree.pre_order_recursive(), tree.pre_order_iterative());
    assert_eq!(tree.post_order_recursive(), tree.post_order_iterative());
    assert_eq!(tree.height_recursive(), tree.height_iterative());
    assert_eq!(tree.height(), 4);

    let iterative = BinarySearchTree::<i32>::with_config(
        TreeConfig::new().with_traversal(Traversal::Iterative),
    );
    assert!(iterative.in_order().is_empty());
    assert_eq!(iterative.height(), -1);
}

#[test]
fn test_height() {
    let mut tree = BinarySearchTree::new();
    assert_eq!(tree.height(), -1, "An empty tree should have height -1.");
    tree.insert(1).unwrap();
    assert_eq!(tree.height(), 0, "A lone root should have height 0.");

    tree.extend(2..=6);
    assert_eq!(tree.height_recursive(), 5, "Sorted inserts should build a chain.");
    assert_eq!(tree.height_iterative(), 5);
    assert_eq!(sample().height(), 2);
}

#[test]
fn test_lookups() {
    let tree = sample();
    assert!(tree.contains(&6));
    assert!(!tree.contains(&9));
    assert_eq!(tree.min(), Some(&2));
    assert_eq!(tree.max(), Some(&8));
    assert_eq!(tree.len(), 7);

    assert_eq!(tree.depth_of(&5), Some(0));
    assert_eq!(tree.depth_of(&4), Some(2));
    assert_eq!(tree.depth_of(&1), None);
    assert_eq!(tree.path_to(&6).map(owned), Some(vec![5, 7, 6]));
    assert_eq!(tree.path_to(&9), None);

    let empty = BinarySearchTree::<i32>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

#[test]
fn test_remove() {
    let mut tree = sample();
    assert!(tree.remove(&2), "A leaf should be removable.");
    assert!(!tree.remove(&2));
    assert_eq!(owned(tree.in_order()), [3, 4, 5, 6, 7, 8]);

    assert!(tree.remove(&3), "A node with one child should be replaced by it.");
    assert_eq!(owned(tree.pre_order()), [5, 4, 7, 6, 8]);

    assert!(tree.remove(&5), "The root should be replaced by its in-order successor.");
    assert_eq!(owned(tree.pre_order()), [6, 4, 7, 8]);
    assert_eq!(tree.len(), 4);

    assert!(!tree.remove(&42));
    for value in [6, 4, 7, 8] {
        assert!(tree.remove(&value));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert!(!tree.remove(&6));
}

#[test]
fn test_remove_successor_with_right_child() {
    let mut tree = BinarySearchTree::from_iter([50, 30, 70, 60, 80, 65]);
    assert!(tree.remove(&50));
    assert_eq!(owned(tree.pre_order()), [60, 30, 70, 65, 80]);
    assert_eq!(owned(tree.in_order()), [30, 60, 65, 70, 80]);
}

#[test]
fn test_remove_duplicates() {
    let mut allow = BinarySearchTree::from_iter([4, 2, 4, 6, 4]);
    assert!(allow.remove(&4));
    assert_eq!(owned(allow.in_order()), [2, 4, 4, 6]);
    assert_eq!(allow.len(), 4);

    let mut count = BinarySearchTree::with_config(
        TreeConfig::new().with_duplicates(DuplicatePolicy::Count),
    );
    count.extend([4, 2, 4, 6, 4]);
    assert!(count.remove(&4));
    assert_eq!(
        format!("{count:?}"),
        "┌    ┌    -\n┌    (2)\n┌    └    -\n(4 x2)\n└    ┌    -\n└    (6)\n└    └    -"
    );
    assert_eq!(count.len(), 4, "Removing a counted value should only drop one occurrence.");
    assert!(count.remove(&4));
    assert!(count.remove(&4));
    assert!(!count.contains(&4));
    assert_eq!(owned(count.in_order()), [2, 6]);
    assert_eq!(count.len(), 2);
}

#[test]
fn test_duplicate_policies() {
    let mut allow = BinarySearchTree::new();
    allow.extend([4, 2, 4, 6, 4]);
    assert_eq!(owned(allow.in_order()), [2, 4, 4, 4, 6]);
    assert_eq!(allow.len(), 5);
    assert_eq!(allow.depth_of(&4), Some(0), "Lookups should find the first equal node.");

    let mut reject = BinarySearchTree::with_config(
        TreeConfig::new().with_duplicates(DuplicatePolicy::Reject),
    );
    assert_eq!(reject.insert(4), Ok(()));
    assert_eq!(reject.insert(4), Err(RejectedDuplicate));
    reject.extend([2, 2, 6]);
    assert_eq!(owned(reject.in_order()), [2, 4, 6]);
    assert_eq!(reject.len(), 3, "Rejected values shouldn't be counted.");

    let mut count = BinarySearchTree::with_config(
        TreeConfig::new()
            .with_duplicates(DuplicatePolicy::Count)
            .with_traversal(Traversal::Iterative),
    );
    count.extend([4, 2, 4, 6, 4]);
    assert_eq!(owned(count.in_order()), [2, 4, 4, 4, 6]);
    assert_eq!(owned(count.level_order()), [4, 4, 4, 2, 6]);
    assert_eq!(count.len(), 5);
    assert_eq!(count.height(), 1, "Counted duplicates shouldn't add nodes.");
}

#[test]
fn test_debug_drawing() {
    let tree = BinarySearchTree::from_iter([2, 1, 3]);
    assert_eq!(
        format!("{tree:?}"),
        "┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    ┌    -\n└    (3)\n└    └    -"
    );

    let mut counted = BinarySearchTree::with_config(
        TreeConfig::new().with_duplicates(DuplicatePolicy::Count),
    );
    counted.extend([7, 7]);
    assert_eq!(format!("{counted:?}"), "┌    -\n(7 x2)\n└    -");
}

#[derive(Debug)]
struct Counted(i32, DropCounter);

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Counted {}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_clear_and_drop() {
    let counter = DropCounter::new();
    let mut tree = BinarySearchTree::new();
    for key in [3, 1, 4, 1, 5] {
        tree.insert(Counted(key, counter.clone())).unwrap();
    }
    tree.clear();
    assert_eq!(counter.dropped(), 5);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);

    let mut deep = BinarySearchTree::with_config(
        TreeConfig::new().with_traversal(Traversal::Iterative),
    );
    deep.extend(0..10_000);
    assert_eq!(deep.height(), 9_999);
    assert_eq!(deep.in_order().len(), 10_000);
    assert_eq!(deep.post_order().first(), Some(&&9_999));
    drop(deep);
}

#[test]
fn test_skewed_tree_on_small_stack() {
    let run = || {
        let mut tree = BinarySearchTree::with_config(
            TreeConfig::new().with_traversal(Traversal::Iterative),
        );
        tree.extend((0..20_000).rev());
        assert_eq!(tree.height(), 19_999);
        assert!(tree.contains(&0));
        assert!(!tree.contains(&-1));
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&19_999));

        let drawn = format!("{:?}", BinarySearchTree::from_iter((0..2_000).rev()));
        assert_eq!(drawn.lines().count(), 4_001);

        assert!(tree.remove(&0));
        assert!(tree.remove(&19_999));
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.len(), 19_998);
    };

    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(run)
        .unwrap()
        .join()
        .unwrap();
}

proptest! {
    #[test]
    fn prop_in_order_is_sorted(values in prop::collection::vec(any::<i16>(), 0..80)) {
        let tree = BinarySearchTree::from_iter(values.iter().copied());
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(tree.in_order_recursive().into_iter().copied().collect::<Vec<_>>(), expected);
        prop_assert_eq!(tree.in_order_recursive(), tree.in_order_iterative());
        prop_assert_eq!(tree.pre_order_recursive(), tree.pre_order_iterative());
        prop_assert_eq!(tree.post_order_recursive(), tree.post_order_iterative());
        prop_assert_eq!(tree.height_recursive(), tree.height_iterative());
    }

    #[test]
    fn prop_remove_matches_sorted_model(
        values in prop::collection::vec(0_i16..50, 0..60),
        removals in prop::collection::vec(0_i16..50, 0..40),
    ) {
        let mut tree = BinarySearchTree::from_iter(values.iter().copied());
        let mut model = values.clone();
        model.sort();

        for value in removals {
            let position = model.iter().position(|&item| item == value);
            prop_assert_eq!(tree.remove(&value), position.is_some());
            if let Some(position) = position {
                model.remove(position);
            }
        }
        prop_assert_eq!(tree.in_order().into_iter().copied().collect::<Vec<_>>(), model.clone());
        prop_assert_eq!(tree.len(), model.len());
    }
}
