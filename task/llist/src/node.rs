/// Dropping a chain directly recurses once per node, so long chains handed
/// out by this crate should be released with [`clear`].
pub type Link<T> = Option<Box<Node<T>>>;

/// A singly-linked node owning the rest of its chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn with_next(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Builds a chain holding `values` in iteration order.
pub fn from_values<T, I>(values: I) -> Link<T>
where
    I: IntoIterator<Item = T>,
{
    let mut head = None;
    let mut tail = &mut head;

    for value in values {
        tail = &mut tail.insert(Box::new(Node::new(value))).next;
    }

    head
}

pub fn values<T: Clone>(head: &Link<T>) -> Vec<T> {
    iter(head).cloned().collect()
}

pub fn len<T>(head: &Link<T>) -> usize {
    nodes(head).count()
}

pub fn iter<T>(head: &Link<T>) -> impl Iterator<Item = &T> {
    nodes(head).map(|node| &node.value)
}

pub fn nodes<T>(head: &Link<T>) -> Nodes<'_, T> {
    Nodes {
        current: head.as_deref(),
    }
}

/// Returns the empty link past the last node of the chain.
pub fn tail_link<T>(head: &mut Link<T>) -> &mut Link<T> {
    let mut cursor = head;
    while let Some(node) = cursor.take() {
        cursor = &mut cursor.insert(node).next;
    }
    cursor
}

/// Drops the chain node by node, so long chains don't recurse in `Drop`.
pub fn clear<T>(head: &mut Link<T>) {
    let mut link = head.take();
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct Nodes<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

////////////////////////////////////////////////////////////////////////////////
