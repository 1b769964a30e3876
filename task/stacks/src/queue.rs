use llist::{Link, Node};

////////////////////////////////////////////////////////////////////////////////

/// FIFO queue over a plain chain. No tail pointer is kept, so `enqueue`
/// walks the whole chain.
#[derive(Debug)]
pub struct Queue<T> {
    first: Link<T>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            first: None,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        *llist::tail_link(&mut self.first) = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    pub fn pick(&self) -> Option<&T> {
        self.first.as_ref().map(|node| &node.value)
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.first.take().map(|node| {
            let Node { value, next } = *node;
            self.first = next;
            self.len -= 1;
            value
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        llist::iter(&self.first)
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        llist::clear(&mut self.first);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let first = llist::from_values(iter);
        let len = llist::len(&first);
        Self { first, len }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pick_on_empty_queue() {
        let queue = Queue::<i32>::new();
        assert_eq!(queue.pick(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn pick_returns_first_value() {
        let mut queue = Queue::new();
        queue.enqueue(44);
        queue.enqueue(12);

        assert_eq!(queue.pick(), Some(&44));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dequeue_in_enqueue_order() {
        let mut queue = Queue::new();
        queue.enqueue(44);
        queue.enqueue(12);
        queue.enqueue(14);

        assert_eq!(queue.dequeue(), Some(44));
        assert_eq!(queue.dequeue(), Some(12));
        assert_eq!(queue.dequeue(), Some(14));
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn enqueue_after_draining() {
        let mut queue: Queue<_> = ["a", "b"].into_iter().collect();
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));

        queue.enqueue("c");
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["c"]);
    }
}
