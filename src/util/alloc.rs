use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many times it (or any of its clones) has been dropped. Used to check
/// that containers release every node they own.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
