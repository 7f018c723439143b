pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}

/// Follows `index` links from `link`, stopping early at the end of the chain, and returns the link
/// that was reached. Following `len` links from the head yields the empty link after the tail.
pub(crate) fn seek_link<T>(mut link: &mut Link<T>, index: usize) -> &mut Link<T> {
    for _ in 0..index {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}
