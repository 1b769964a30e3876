use crate::{clear, len, nodes, Error, Link, Node, Result};

////////////////////////////////////////////////////////////////////////////////

/// An owned chain whose tail may point back to one of its own nodes.
///
/// Owning links stay acyclic. The back link is a plain index, so the cycle
/// exists only for walks that go through [`LoopedList::successor`].
#[derive(Debug)]
pub struct LoopedList<T> {
    head: Link<T>,
    back_link: Option<usize>,
}

impl<T> LoopedList<T> {
    pub fn new(head: Link<T>) -> Self {
        Self {
            head,
            back_link: None,
        }
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn node_at(&self, index: usize) -> Option<&Node<T>> {
        nodes(&self.head).nth(index)
    }

    /// Makes the tail continue into the node at `index`.
    pub fn link_tail_to(&mut self, index: usize) -> Result<()> {
        let length = len(&self.head);
        if index >= length {
            return Err(Error::IndexOutOfRange { index, length });
        }

        self.back_link = Some(index);
        Ok(())
    }

    pub fn unlink_tail(&mut self) {
        self.back_link = None;
    }

    /// Next node after `node`, following the back link from the tail.
    /// `node` must belong to this list.
    pub fn successor<'a>(&'a self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        match node.next.as_deref() {
            Some(next) => Some(next),
            None => self.back_link.and_then(|index| self.node_at(index)),
        }
    }

    pub fn into_inner(mut self) -> Link<T> {
        self.head.take()
    }
}

impl<T> Drop for LoopedList<T> {
    fn drop(&mut self) {
        clear(&mut self.head);
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_values;

    #[test]
    fn tail_follows_back_link() {
        let mut list = LoopedList::new(from_values([1, 2, 3]));
        list.link_tail_to(1).unwrap();

        let tail = list.node_at(2).unwrap();
        let next = list.successor(tail).unwrap();

        assert!(std::ptr::eq(next, list.node_at(1).unwrap()));
    }

    #[test]
    fn tail_without_back_link_ends_walk() {
        let list = LoopedList::new(from_values([1, 2, 3]));
        let tail = list.node_at(2).unwrap();

        assert!(list.successor(tail).is_none());
    }

    #[test]
    fn rejects_back_link_out_of_range() {
        let mut list = LoopedList::new(from_values([1, 2, 3]));

        assert_eq!(
            list.link_tail_to(3),
            Err(Error::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );

        let mut empty = LoopedList::<i32>::new(None);
        assert!(empty.link_tail_to(0).is_err());
    }

    #[test]
    fn unlinking_restores_plain_chain() {
        let mut list = LoopedList::new(from_values(['x', 'y']));
        list.link_tail_to(0).unwrap();
        list.unlink_tail();

        let tail = list.node_at(1).unwrap();
        assert!(list.successor(tail).is_none());
        assert_eq!(crate::values(&list.into_inner()), vec!['x', 'y']);
    }

    #[test]
    fn drops_long_looped_list() {
        let mut list = LoopedList::new(from_values(0..500_000));
        list.link_tail_to(250_000).unwrap();

        drop(list);
    }
}
