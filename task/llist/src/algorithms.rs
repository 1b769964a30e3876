use crate::{clear, iter, len, nodes, Error, Link, LoopedList, Node, Result};

use std::collections::HashSet;

////////////////////////////////////////////////////////////////////////////////

pub type Digit = u8;

const RADIX: Digit = 10;

////////////////////////////////////////////////////////////////////////////////

/// Keeps the first occurrence of every value, unlinking later ones in place.
pub fn remove_duplicates<T: PartialEq>(head: &mut Link<T>) {
    let mut current = head.as_deref_mut();

    while let Some(Node { value, next }) = current {
        let mut cursor = &mut *next;
        while let Some(candidate) = cursor.take() {
            if candidate.value == *value {
                *cursor = candidate.next;
            } else {
                cursor = &mut cursor.insert(candidate).next;
            }
        }

        current = next.as_deref_mut();
    }
}

/// Returns the node `index_from_end` positions before the tail (0 is the tail).
pub fn find_last<T>(head: &Link<T>, index_from_end: usize) -> Result<&Node<T>> {
    let length = len(head);
    let out_of_range = Error::IndexOutOfRange {
        index: index_from_end,
        length,
    };

    if index_from_end >= length {
        return Err(out_of_range);
    }

    nodes(head)
        .nth(length - index_from_end - 1)
        .ok_or(out_of_range)
}

/// Copies the chain so that values below `pivot` come first. Order within
/// each side is preserved.
pub fn partition<T: PartialOrd + Clone>(head: &Link<T>, pivot: &T) -> Link<T> {
    let mut smaller = None;
    let mut smaller_tail = &mut smaller;
    let mut bigger = None;
    let mut bigger_tail = &mut bigger;

    for value in iter(head) {
        let node = Box::new(Node::new(value.clone()));
        if value < pivot {
            smaller_tail = &mut smaller_tail.insert(node).next;
        } else {
            bigger_tail = &mut bigger_tail.insert(node).next;
        }
    }

    *smaller_tail = bigger;
    smaller
}

/// Adds two numbers stored least significant digit first.
pub fn sum_reversed(a: &Link<Digit>, b: &Link<Digit>) -> Result<Link<Digit>> {
    if let Some(node) = nodes(a).chain(nodes(b)).find(|node| node.value >= RADIX) {
        return Err(Error::NotADigit(node.value));
    }

    let mut a = a.as_deref();
    let mut b = b.as_deref();

    let mut head = None;
    let mut tail = &mut head;
    let mut carry = 0;

    while a.is_some() || b.is_some() {
        let (digit, next_carry) = add_digits(digit_at(a), digit_at(b), carry);
        carry = next_carry;
        tail = &mut tail.insert(Box::new(Node::new(digit))).next;

        a = a.and_then(|node| node.next.as_deref());
        b = b.and_then(|node| node.next.as_deref());
    }

    if carry > 0 {
        *tail = Some(Box::new(Node::new(carry)));
    }

    Ok(head)
}

/// Adds two numbers stored most significant digit first. Consumes both
/// operands since they are reversed in place.
pub fn sum(a: Link<Digit>, b: Link<Digit>) -> Result<Link<Digit>> {
    let mut a = reverse(a);
    let mut b = reverse(b);
    let reversed_sum = sum_reversed(&a, &b);

    clear(&mut a);
    clear(&mut b);

    Ok(reverse(reversed_sum?))
}

fn digit_at(node: Option<&Node<Digit>>) -> Digit {
    node.map_or(0, |node| node.value)
}

fn add_digits(a: Digit, b: Digit, carry: Digit) -> (Digit, Digit) {
    let sum = a + b + carry;
    (sum % RADIX, sum / RADIX)
}

pub fn reverse<T>(mut head: Link<T>) -> Link<T> {
    let mut previous = None;

    while let Some(mut node) = head {
        head = node.next.take();
        node.next = previous;
        previous = Some(node);
    }

    previous
}

/// Returns the first node reached twice while walking the list, if any.
pub fn find_loop<T>(list: &LoopedList<T>) -> Option<&Node<T>> {
    let mut visited = HashSet::new();
    let mut current = list.head();

    while let Some(node) = current {
        if !visited.insert(node as *const Node<T>) {
            log::debug!("loop entry found after {} distinct nodes", visited.len());
            return Some(node);
        }
        current = list.successor(node);
    }

    None
}

pub fn is_palindrome<T: PartialEq>(head: &Link<T>) -> bool {
    let mut reversed = iter(head).fold(None, |next, value| {
        Some(Box::new(Node::with_next(value, next)))
    });

    let palindrome = iter(head).eq(iter(&reversed).copied());
    clear(&mut reversed);
    palindrome
}

////////////////////////////////////////////////////////////////////////////////
