use llist::{Link, Node};

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct Stack<T> {
    last: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { last: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        self.last = Some(Box::new(Node::with_next(value, self.last.take())));
        self.len += 1;
    }

    pub fn pick(&self) -> Option<&T> {
        self.last.as_ref().map(|node| &node.value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.last.take().map(|node| {
            let Node { value, next } = *node;
            self.last = next;
            self.len -= 1;
            value
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.pick().is_none()
    }

    /// Iterates from the top of the stack.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        llist::iter(&self.last)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        llist::clear(&mut self.last);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        iter.into_iter().for_each(|value| stack.push(value));
        stack
    }
}

////////////////////////////////////////////////////////////////////////////////
