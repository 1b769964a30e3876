use crate::Stack;

////////////////////////////////////////////////////////////////////////////////

/// Stack with O(1) access to its minimum.
///
/// `minimums` holds every value that was a minimum at push time, so popping
/// the current minimum exposes the previous one.
#[derive(Debug)]
pub struct MinStack<T> {
    values: Stack<T>,
    minimums: Stack<T>,
}

impl<T> Default for MinStack<T> {
    fn default() -> Self {
        Self {
            values: Stack::new(),
            minimums: Stack::new(),
        }
    }
}

impl<T: PartialOrd + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        let is_new_minimum = match self.minimums.pick() {
            Some(minimum) => value <= *minimum,
            None => true,
        };
        if is_new_minimum {
            self.minimums.push(value.clone());
        }
        self.values.push(value);
    }

    pub fn pick(&self) -> Option<&T> {
        self.values.pick()
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.values.pop()?;
        if self.minimums.pick() == Some(&value) {
            self.minimums.pop();
        }
        Some(value)
    }

    pub fn min(&self) -> Option<&T> {
        self.minimums.pick()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////
