#![cfg(test)]

use super::applications::{is_balanced, next_smaller_elements};
use super::*;
use crate::collections::traits::{Deque, Queue, Stack};
use crate::config::Backing;
use crate::util::error::EmptyStructure;

const BACKINGS: [Backing; 2] = [Backing::Contiguous, Backing::Linked];

fn exercise_stack(mut stack: impl Stack<i32>) {
    assert_eq!(stack.pop(), Err(EmptyStructure::STACK), "Popping nothing should be an error.");
    assert_eq!(stack.peek(), Err(EmptyStructure::STACK));
    assert!(stack.is_empty());

    stack.push(10);
    stack.push(20);
    stack.push(30);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Ok(&30));
    assert_eq!(stack.pop(), Ok(30));
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.peek(), Ok(&10));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok(10));
    assert!(stack.pop().is_err());
    assert!(stack.is_empty());
}

fn exercise_queue(mut queue: impl Queue<i32>) {
    assert_eq!(queue.dequeue(), Err(EmptyStructure::QUEUE));
    assert_eq!(queue.peek(), Err(EmptyStructure::QUEUE));

    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);
    assert_eq!(queue.dequeue(), Ok(10), "The first value in should be the first out.");
    assert_eq!(queue.peek(), Ok(&20));
    queue.enqueue(40);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Ok(20));
    assert_eq!(queue.dequeue(), Ok(30));
    assert_eq!(queue.dequeue(), Ok(40));
    assert!(queue.is_empty());
}

fn exercise_deque(mut deque: impl Deque<i32>) {
    assert_eq!(deque.dequeue_front(), Err(EmptyStructure::DEQUE));
    assert_eq!(deque.dequeue_rear(), Err(EmptyStructure::DEQUE));
    assert_eq!(deque.peek_front(), Err(EmptyStructure::DEQUE));
    assert_eq!(deque.peek_rear(), Err(EmptyStructure::DEQUE));

    deque.enqueue_rear(10);
    deque.enqueue_rear(20);
    deque.enqueue_front(5);
    assert_eq!(deque.len(), 3);
    assert_eq!(deque.peek_front(), Ok(&5));
    assert_eq!(deque.peek_rear(), Ok(&20));
    assert_eq!(deque.dequeue_front(), Ok(5));
    assert_eq!(deque.dequeue_rear(), Ok(20));
    assert_eq!(deque.peek_front(), deque.peek_rear(), "One value is both front and rear.");
    assert_eq!(deque.dequeue_rear(), Ok(10));
    assert!(deque.is_empty());

    deque.enqueue_front(1);
    assert_eq!(deque.dequeue_rear(), Ok(1), "Front and rear should meet in the middle.");
}

#[test]
fn test_stacks() {
    exercise_stack(ArrayStack::new());
    exercise_stack(LinkedStack::new());
    for backing in BACKINGS {
        let stack = SelectedStack::new(backing);
        assert_eq!(stack.backing(), backing);
        exercise_stack(stack);
    }
}

#[test]
fn test_queues() {
    exercise_queue(ArrayQueue::new());
    exercise_queue(LinkedQueue::new());
    for backing in BACKINGS {
        let queue = SelectedQueue::new(backing);
        assert_eq!(queue.backing(), backing);
        exercise_queue(queue);
    }
}

#[test]
fn test_deques() {
    exercise_deque(ArrayDeque::new());
    exercise_deque(LinkedDeque::new());
    for backing in BACKINGS {
        let deque = SelectedDeque::new(backing);
        assert_eq!(deque.backing(), backing);
        exercise_deque(deque);
    }
}

#[test]
fn test_empty_messages() {
    assert_eq!(EmptyStructure::STACK.to_string(), "stack is empty");
    assert_eq!(EmptyStructure::QUEUE.to_string(), "queue is empty");
    assert_eq!(EmptyStructure::DEQUE.to_string(), "deque is empty");
    assert_eq!(SelectedStack::<u8>::default().backing(), Backing::Linked);
}

#[test]
fn test_balanced_brackets() {
    assert!(is_balanced(""));
    assert!(is_balanced("()[]{}"));
    assert!(is_balanced("{[()()]}"));
    assert!(is_balanced("fn main() { let v = [1, 2]; }"));
    assert!(!is_balanced("(]"));
    assert!(!is_balanced("([)]"));
    assert!(!is_balanced("(("), "Unclosed brackets shouldn't balance.");
    assert!(!is_balanced("())"), "A stray closing bracket shouldn't balance.");
}

#[test]
fn test_next_smaller_elements() {
    assert_eq!(
        next_smaller_elements(&[4, 2, 14, 7, 1, 9]),
        [Some(2), Some(1), Some(7), Some(1), None, None]
    );
    assert_eq!(
        next_smaller_elements(&[3, 3, 1]),
        [Some(1), Some(1), None],
        "Equal values aren't strictly smaller."
    );
    assert_eq!(
        next_smaller_elements(&[3, 9, 8, 2]),
        [Some(2), Some(8), Some(2), None],
        "Several larger candidates should be discarded in one step."
    );
    assert!(next_smaller_elements::<u8>(&[]).is_empty());
}

#[test]
fn test_extend() {
    for backing in BACKINGS {
        let mut stack = SelectedStack::new(backing);
        stack.extend([1, 2, 3]);
        assert_eq!(stack.pop(), Ok(3), "Extending a stack should leave the last value on top.");

        let mut queue = SelectedQueue::new(backing);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.dequeue(), Ok(1), "Extending a queue should keep arrival order.");

        let mut deque = SelectedDeque::new(backing);
        deque.extend([1, 2, 3]);
        assert_eq!(deque.peek_front(), Ok(&1));
        assert_eq!(deque.peek_rear(), Ok(&3));
    }
}
