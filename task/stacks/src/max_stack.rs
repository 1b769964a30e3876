use llist::{Link, Node};

////////////////////////////////////////////////////////////////////////////////

/// Stack kept sorted in descending order, so the top is always the maximum.
/// `push` is linear, `pick` and `pop` are constant.
#[derive(Debug)]
pub struct MaxStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Default for MaxStack<T> {
    fn default() -> Self {
        Self { top: None, len: 0 }
    }
}

impl<T: PartialOrd> MaxStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` right before the first node not greater than it.
    pub fn push(&mut self, value: T) {
        let mut cursor = &mut self.top;
        loop {
            match cursor.take() {
                Some(node) if node.value > value => {
                    cursor = &mut cursor.insert(node).next;
                }
                rest => {
                    *cursor = Some(Box::new(Node::with_next(value, rest)));
                    break;
                }
            }
        }
        self.len += 1;
    }

    pub fn pick(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let Node { value, next } = *node;
            self.top = next;
            self.len -= 1;
            value
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl<T> Drop for MaxStack<T> {
    fn drop(&mut self) {
        llist::clear(&mut self.top);
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::Rng;

    fn drain<T: PartialOrd>(stack: &mut MaxStack<T>) -> Vec<T> {
        std::iter::from_fn(|| stack.pop()).collect()
    }

    #[test]
    fn pick_on_empty_stack() {
        let stack = MaxStack::<i32>::new();
        assert_eq!(stack.pick(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn pick_returns_only_value() {
        let mut stack = MaxStack::new();
        stack.push(44);

        assert_eq!(stack.pick(), Some(&44));
        assert_eq!(stack.pop(), Some(44));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn pop_returns_max_of_two() {
        let mut stack = MaxStack::new();
        stack.push(44);
        stack.push(12);

        assert_eq!(stack.pop(), Some(44));
        assert_eq!(stack.pop(), Some(12));
    }

    #[test]
    fn pops_in_descending_order() {
        let mut stack = MaxStack::new();
        for value in [44, 15, 108, 55, 12] {
            stack.push(value);
        }

        assert_eq!(stack.len(), 5);
        assert_eq!(drain(&mut stack), vec![108, 55, 44, 15, 12]);
    }

    #[test]
    fn keeps_equal_values() {
        let mut stack = MaxStack::new();
        for value in [3, 7, 3, 7, 1] {
            stack.push(value);
        }

        assert_eq!(drain(&mut stack), vec![7, 7, 3, 3, 1]);
    }

    #[derive(Debug)]
    struct Keyed(i32, &'static str);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn newer_equal_value_sits_above_older() {
        let mut stack = MaxStack::new();
        stack.push(Keyed(5, "old"));
        stack.push(Keyed(2, "small"));
        stack.push(Keyed(5, "new"));

        let order: Vec<_> = drain(&mut stack).into_iter().map(|keyed| keyed.1).collect();
        assert_eq!(order, vec!["new", "old", "small"]);
    }

    #[test]
    fn random_pushes_pop_sorted() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let values: Vec<i32> = (0..rng.gen_range(0..40))
                .map(|_| rng.gen_range(-100..100))
                .collect();

            let mut stack = MaxStack::new();
            values.iter().for_each(|&value| stack.push(value));

            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));

            assert_eq!(drain(&mut stack), expected);
        }
    }
}
