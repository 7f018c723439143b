use crate::util::error::EmptyStructure;

/// A first-in, first-out collection.
pub trait Queue<T> {
    /// Adds `value` to the rear of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the value at the front of the queue.
    fn dequeue(&mut self) -> Result<T, EmptyStructure>;

    /// Returns a reference to the value at the front of the queue without removing it.
    fn peek(&self) -> Result<&T, EmptyStructure>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
