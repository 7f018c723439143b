use crate::util::error::EmptyStructure;

/// A double-ended queue, accepting and yielding values at both ends.
pub trait Deque<T> {
    fn enqueue_front(&mut self, value: T);

    fn enqueue_rear(&mut self, value: T);

    fn dequeue_front(&mut self) -> Result<T, EmptyStructure>;

    fn dequeue_rear(&mut self) -> Result<T, EmptyStructure>;

    fn peek_front(&self) -> Result<&T, EmptyStructure>;

    fn peek_rear(&self) -> Result<&T, EmptyStructure>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
