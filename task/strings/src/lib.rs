#![forbid(unsafe_code)]

mod matrix;
mod text;

pub use matrix::{rotate_matrix_90_degrees, zero_columns_and_rows, Pixel};
pub use text::{
    compress, encode_spaces, has_only_unique_chars, is_permutation, is_permutation_of,
    is_rotated, reverse,
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("used length {used_length} exceeds input length {length}")]
    LengthOutOfRange { used_length: usize, length: usize },

    #[error("matrix is not square: row {row} has {columns} columns, expected {size}")]
    NotSquare {
        row: usize,
        columns: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
