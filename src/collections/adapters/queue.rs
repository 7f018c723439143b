use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::Queue;
use crate::config::Backing;
use crate::util::error::EmptyStructure;

use super::rejected;

/// A [`Queue`] backed by a [`Vec`]. Values join at the end of the buffer and leave from the start,
/// so every [`dequeue`](Queue::dequeue) shifts the remaining values down by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> ArrayQueue<T> {
    pub const fn new() -> ArrayQueue<T> {
        ArrayQueue { items: Vec::new() }
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, value: T) {
        self.items.push(value);
    }

    fn dequeue(&mut self) -> Result<T, EmptyStructure> {
        if self.items.is_empty() {
            return Err(rejected(EmptyStructure::QUEUE));
        }
        Ok(self.items.remove(0))
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        self.items.first().ok_or_else(|| rejected(EmptyStructure::QUEUE))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A [`Queue`] backed by a [`DoublyLinkedList`], joining at the back and leaving from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue { list: DoublyLinkedList::new() }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    fn dequeue(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop_front().ok_or_else(|| rejected(EmptyStructure::QUEUE))
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        self.list.front().ok_or_else(|| rejected(EmptyStructure::QUEUE))
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

/// A [`Queue`] whose backing is chosen when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedQueue<T> {
    Contiguous(ArrayQueue<T>),
    Linked(LinkedQueue<T>),
}

impl<T> SelectedQueue<T> {
    pub const fn new(backing: Backing) -> SelectedQueue<T> {
        match backing {
            Backing::Contiguous => SelectedQueue::Contiguous(ArrayQueue::new()),
            Backing::Linked => SelectedQueue::Linked(LinkedQueue::new()),
        }
    }

    pub const fn backing(&self) -> Backing {
        match self {
            SelectedQueue::Contiguous(_) => Backing::Contiguous,
            SelectedQueue::Linked(_) => Backing::Linked,
        }
    }
}

impl<T> Queue<T> for SelectedQueue<T> {
    fn enqueue(&mut self, value: T) {
        match self {
            SelectedQueue::Contiguous(queue) => queue.enqueue(value),
            SelectedQueue::Linked(queue) => queue.enqueue(value),
        }
    }

    fn dequeue(&mut self) -> Result<T, EmptyStructure> {
        match self {
            SelectedQueue::Contiguous(queue) => queue.dequeue(),
            SelectedQueue::Linked(queue) => queue.dequeue(),
        }
    }

    fn peek(&self) -> Result<&T, EmptyStructure> {
        match self {
            SelectedQueue::Contiguous(queue) => queue.peek(),
            SelectedQueue::Linked(queue) => queue.peek(),
        }
    }

    fn len(&self) -> usize {
        match self {
            SelectedQueue::Contiguous(queue) => queue.len(),
            SelectedQueue::Linked(queue) => queue.len(),
        }
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for SelectedQueue<T> {
    fn default() -> Self {
        Self::new(Backing::default())
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> Extend<T> for SelectedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}
