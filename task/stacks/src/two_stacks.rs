use crate::Stack;

////////////////////////////////////////////////////////////////////////////////

/// FIFO queue made of two stacks.
///
/// New values land on `newest`. `oldest` is refilled from `newest` only once
/// it runs dry, which reverses them into dequeue order.
#[derive(Debug)]
pub struct QueueOnTwoStacks<T> {
    newest: Stack<T>,
    oldest: Stack<T>,
}

impl<T> Default for QueueOnTwoStacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueOnTwoStacks<T> {
    pub fn new() -> Self {
        Self {
            newest: Stack::new(),
            oldest: Stack::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.newest.push(value);
    }

    pub fn pick(&mut self) -> Option<&T> {
        self.shift_stacks();
        self.oldest.pick()
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.shift_stacks();
        self.oldest.pop()
    }

    pub fn len(&self) -> usize {
        self.newest.len() + self.oldest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.newest.is_empty() && self.oldest.is_empty()
    }

    fn shift_stacks(&mut self) {
        if !self.oldest.is_empty() || self.newest.is_empty() {
            return;
        }

        log::trace!("moving {} values to the oldest stack", self.newest.len());
        while let Some(value) = self.newest.pop() {
            self.oldest.push(value);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
