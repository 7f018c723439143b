use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::Deque;
use crate::config::Backing;
use crate::util::error::EmptyStructure;

use super::rejected;

/// A [`Deque`] backed by a [`Vec`]. The rear is the end of the buffer; operations on the front
/// shift every value in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeque<T> {
    items: Vec<T>,
}

impl<T> ArrayDeque<T> {
    pub const fn new() -> ArrayDeque<T> {
        ArrayDeque { items: Vec::new() }
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
    fn enqueue_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn enqueue_rear(&mut self, value: T) {
        self.items.push(value);
    }

    fn dequeue_front(&mut self) -> Result<T, EmptyStructure> {
        if self.items.is_empty() {
            return Err(rejected(EmptyStructure::DEQUE));
        }
        Ok(self.items.remove(0))
    }

    fn dequeue_rear(&mut self) -> Result<T, EmptyStructure> {
        self.items.pop().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn peek_front(&self) -> Result<&T, EmptyStructure> {
        self.items.first().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn peek_rear(&self) -> Result<&T, EmptyStructure> {
        self.items.last().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A [`Deque`] backed by a [`DoublyLinkedList`]. Both ends are tracked, so all eight operations
/// are `O(1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedDeque<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedDeque<T> {
    pub const fn new() -> LinkedDeque<T> {
        LinkedDeque { list: DoublyLinkedList::new() }
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    fn enqueue_front(&mut self, value: T) {
        self.list.push_front(value);
    }

    fn enqueue_rear(&mut self, value: T) {
        self.list.push_back(value);
    }

    fn dequeue_front(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop_front().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn dequeue_rear(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop_back().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn peek_front(&self) -> Result<&T, EmptyStructure> {
        self.list.front().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn peek_rear(&self) -> Result<&T, EmptyStructure> {
        self.list.back().ok_or_else(|| rejected(EmptyStructure::DEQUE))
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

/// A [`Deque`] whose backing is chosen when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedDeque<T> {
    Contiguous(ArrayDeque<T>),
    Linked(LinkedDeque<T>),
}

impl<T> SelectedDeque<T> {
    pub const fn new(backing: Backing) -> SelectedDeque<T> {
        match backing {
            Backing::Contiguous => SelectedDeque::Contiguous(ArrayDeque::new()),
            Backing::Linked => SelectedDeque::Linked(LinkedDeque::new()),
        }
    }

    pub const fn backing(&self) -> Backing {
        match self {
            SelectedDeque::Contiguous(_) => Backing::Contiguous,
            SelectedDeque::Linked(_) => Backing::Linked,
        }
    }
}

impl<T> Deque<T> for SelectedDeque<T> {
    fn enqueue_front(&mut self, value: T) {
        match self {
            SelectedDeque::Contiguous(deque) => deque.enqueue_front(value),
            SelectedDeque::Linked(deque) => deque.enqueue_front(value),
        }
    }

    fn enqueue_rear(&mut self, value: T) {
        match self {
            SelectedDeque::Contiguous(deque) => deque.enqueue_rear(value),
            SelectedDeque::Linked(deque) => deque.enqueue_rear(value),
        }
    }

    fn dequeue_front(&mut self) -> Result<T, EmptyStructure> {
        match self {
            SelectedDeque::Contiguous(deque) => deque.dequeue_front(),
            SelectedDeque::Linked(deque) => deque.dequeue_front(),
        }
    }

    fn dequeue_rear(&mut self) -> Result<T, EmptyStructure> {
        match self {
            SelectedDeque::Contiguous(deque) => deque.dequeue_rear(),
            SelectedDeque::Linked(deque) => deque.dequeue_rear(),
        }
    }

    fn peek_front(&self) -> Result<&T, EmptyStructure> {
        match self {
            SelectedDeque::Contiguous(deque) => deque.peek_front(),
            SelectedDeque::Linked(deque) => deque.peek_front(),
        }
    }

    fn peek_rear(&self) -> Result<&T, EmptyStructure> {
        match self {
            SelectedDeque::Contiguous(deque) => deque.peek_rear(),
            SelectedDeque::Linked(deque) => deque.peek_rear(),
        }
    }

    fn len(&self) -> usize {
        match self {
            SelectedDeque::Contiguous(deque) => deque.len(),
            SelectedDeque::Linked(deque) => deque.len(),
        }
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for SelectedDeque<T> {
    fn default() -> Self {
        Self::new(Backing::default())
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue_rear(value);
        }
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue_rear(value);
        }
    }
}

impl<T> Extend<T> for SelectedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue_rear(value);
        }
    }
}
