mod circular_linked_list;
mod tests;

pub use circular_linked_list::*;
