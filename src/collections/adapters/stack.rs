use crate::collections::linked::SinglyLinkedList;
use crate::collections::traits::Stack;
use crate::config::Backing;
use crate::util::error::EmptyStructure;

use super::rejected;

/// A [`Stack`] backed by a [`Vec`], with the top of the stack at the end of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub const fn new() -> ArrayStack<T> {
        ArrayStack { items: Vec::new() }
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Result<T, EmptyStructure> {
        self.items.pop().ok_or_else(|| rejected(EmptyStructure::STACK))
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        self.items.last().ok_or_else(|| rejected(EmptyStructure::STACK))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A [`Stack`] backed by a [`SinglyLinkedList`], with the top of the stack at the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedStack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack { list: SinglyLinkedList::new() }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    fn pop(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop_front().ok_or_else(|| rejected(EmptyStructure::STACK))
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        self.list.front().ok_or_else(|| rejected(EmptyStructure::STACK))
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

/// A [`Stack`] whose backing is chosen when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedStack<T> {
    Contiguous(ArrayStack<T>),
    Linked(LinkedStack<T>),
}

impl<T> SelectedStack<T> {
    pub const fn new(backing: Backing) -> SelectedStack<T> {
        match backing {
            Backing::Contiguous => SelectedStack::Contiguous(ArrayStack::new()),
            Backing::Linked => SelectedStack::Linked(LinkedStack::new()),
        }
    }

    pub const fn backing(&self) -> Backing {
        match self {
            SelectedStack::Contiguous(_) => Backing::Contiguous,
            SelectedStack::Linked(_) => Backing::Linked,
        }
    }
}

impl<T> Stack<T> for SelectedStack<T> {
    fn push(&mut self, value: T) {
        match self {
            SelectedStack::Contiguous(stack) => stack.push(value),
            SelectedStack::Linked(stack) => stack.push(value),
        }
    }

    fn pop(&mut self) -> Result<T, EmptyStructure> {
        match self {
            SelectedStack::Contiguous(stack) => stack.pop(),
            SelectedStack::Linked(stack) => stack.pop(),
        }
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        match self {
            SelectedStack::Contiguous(stack) => stack.peek(),
            SelectedStack::Linked(stack) => stack.peek(),
        }
    }

    fn len(&self) -> usize {
        match self {
            SelectedStack::Contiguous(stack) => stack.len(),
            SelectedStack::Linked(stack) => stack.len(),
        }
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for SelectedStack<T> {
    fn default() -> Self {
        Self::new(Backing::default())
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> Extend<T> for SelectedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
