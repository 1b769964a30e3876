use crate::{Error, Result};

use num_traits::Zero;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

fn ensure_square<T>(matrix: &[Vec<T>]) -> Result<()> {
    let size = matrix.len();

    match matrix.iter().position(|row| row.len() != size) {
        Some(row) => {
            let error = Error::NotSquare {
                row,
                columns: matrix[row].len(),
                size,
            };
            log::debug!("rejecting matrix: {error}");
            Err(error)
        }
        None => Ok(()),
    }
}

/// Rotates a square matrix 90 degrees clockwise in place, one ring at a time.
pub fn rotate_matrix_90_degrees<T: Copy>(matrix: &mut [Vec<T>]) -> Result<()> {
    ensure_square(matrix)?;

    let size = matrix.len();
    for layer in 0..size / 2 {
        let first = layer;
        let last = size - 1 - layer;

        for index in first..last {
            let mirrored = last - (index - first);
            let top = matrix[first][index];

            matrix[first][index] = matrix[mirrored][first];
            matrix[mirrored][first] = matrix[last][mirrored];
            matrix[last][mirrored] = matrix[index][last];
            matrix[index][last] = top;
        }
    }

    Ok(())
}

/// Zeroes every row and column that holds a zero in the original matrix.
pub fn zero_columns_and_rows<T: Zero + Copy>(matrix: &mut [Vec<T>]) -> Result<()> {
    ensure_square(matrix)?;

    let size = matrix.len();
    let mut zero_rows = vec![false; size];
    let mut zero_columns = vec![false; size];

    for (row, values) in matrix.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            if value.is_zero() {
                zero_rows[row] = true;
                zero_columns[column] = true;
            }
        }
    }

    for (row, values) in matrix.iter_mut().enumerate() {
        for (column, value) in values.iter_mut().enumerate() {
            if zero_rows[row] || zero_columns[column] {
                *value = T::zero();
            }
        }
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
