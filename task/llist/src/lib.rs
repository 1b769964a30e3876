#![forbid(unsafe_code)]

mod algorithms;
mod looped;
mod node;

pub use algorithms::{
    find_last, find_loop, is_palindrome, partition, remove_duplicates, reverse, sum,
    sum_reversed, Digit,
};
pub use looped::LoopedList;
pub use node::{clear, from_values, iter, len, nodes, tail_link, values, Link, Node, Nodes};

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of range for a list of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("node value {0} is not a decimal digit")]
    NotADigit(Digit),
}

pub type Result<T> = std::result::Result<T, Error>;
