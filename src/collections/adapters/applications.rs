//! Problems that fall out naturally from a [`Stack`].

use crate::collections::traits::Stack;

use super::{ArrayStack, LinkedStack};

/// Returns true if every closing bracket in `text` closes the most recently opened bracket of the
/// same kind, and nothing is left open. Characters other than `()[]{}` are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut open = LinkedStack::new();

    for c in text.chars() {
        let expected = match c {
            '(' | '[' | '{' => {
                open.push(c);
                continue;
            },
            ')' => '(',
            ']' => '[',
            '}' => '{',
            _ => continue,
        };

        if open.pop() != Ok(expected) {
            return false;
        }
    }

    open.is_empty()
}

/// For each value, finds the first value to its right that is strictly smaller.
///
/// Walks from the back, keeping a stack of candidates: anything greater than or equal to the
/// current value can never be an answer for the values before it, so it is discarded.
pub fn next_smaller_elements<T: Ord + Copy>(values: &[T]) -> Vec<Option<T>> {
    let mut candidates: ArrayStack<T> = ArrayStack::new();
    let mut result = vec![None; values.len()];

    for (index, &value) in values.iter().enumerate().rev() {
        while let Ok(&top) = candidates.peek() {
            if top < value {
                break;
            }
            candidates.pop().ok();
        }
        result[index] = candidates.peek().ok().copied();
        candidates.push(value);
    }

    result
}
