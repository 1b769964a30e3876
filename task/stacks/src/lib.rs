#![forbid(unsafe_code)]

mod hanoi;
mod max_stack;
mod min_stack;
mod queue;
mod shelter;
mod stack;
mod two_stacks;

pub use hanoi::{Disk, HanoiGame};
pub use max_stack::MaxStack;
pub use min_stack::MinStack;
pub use queue::Queue;
pub use shelter::{Animal, Cat, Dog, Named, Shelter, Species};
pub use stack::Stack;
pub use two_stacks::QueueOnTwoStacks;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("minimum height of a hanoi tower is 1, got {height}")]
    TowerTooLow { height: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
