use crate::util::error::EmptyStructure;

/// A last-in, first-out collection.
pub trait Stack<T> {
    /// Places `value` on top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the value on top of the stack.
    fn pop(&mut self) -> Result<T, EmptyStructure>;

    /// Returns a reference to the value on top of the stack without removing it.
    fn peek(&self) -> Result<&T, EmptyStructure>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
