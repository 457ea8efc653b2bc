use algebra::{
    modulus::PrimeModulus,
    random::sample_uniform_values,
    reduce::{ReduceDotProduct, ReduceMulAdd},
};
use num_traits::ConstZero;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

/// A dense row-major matrix.
///
/// The shape always matches the data length, deserialization rejects
/// inconsistent input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData<T>")]
pub struct Matrix<T: Copy> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct MatrixData<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> TryFrom<MatrixData<T>> for Matrix<T> {
    type Error = String;

    fn try_from(value: MatrixData<T>) -> Result<Self, Self::Error> {
        Matrix::from_vec(value.rows, value.cols, value.data).ok_or_else(|| {
            format!(
                "matrix data length does not match shape {}x{}",
                value.rows, value.cols
            )
        })
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new [`Matrix<T>`] from row-major `data`.
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    #[inline]
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Creates a new [`Matrix<T>`] from its rows.
    ///
    /// Returns `None` if the rows do not share one length.
    pub fn from_rows(rows: &[Vec<T>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Returns the number of rows of this [`Matrix<T>`].
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of this [`Matrix<T>`].
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the `i`-th row.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns an iterator over the rows.
    #[inline]
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // A matrix without columns still has `rows` empty rows.
        let cols = self.cols;
        (0..self.rows).map(move |i| &self.data[i * cols..(i + 1) * cols])
    }

    /// Returns the entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Returns the row-major data slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the transpose of this [`Matrix<T>`].
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            data.extend(self.iter_rows().map(|row| row[j]));
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Copy + ConstZero> Matrix<T> {
    /// Generates a [`Matrix<T>`] with all values are `0`.
    #[inline]
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
        }
    }

    /// Computes `self · v (mod modulus)`.
    #[inline]
    pub fn mul_vector_reduce<M>(&self, v: &[T], modulus: M) -> Vec<T>
    where
        M: Copy + ReduceDotProduct<T, Output = T>,
    {
        debug_assert_eq!(self.cols, v.len());
        self.iter_rows()
            .map(|row| modulus.reduce_dot_product(row, v))
            .collect()
    }

    /// Computes `selfᵗ · v (mod modulus)` without materializing the transpose.
    pub fn transpose_mul_vector_reduce<M>(&self, v: &[T], modulus: M) -> Vec<T>
    where
        M: Copy + ReduceMulAdd<T, Output = T>,
    {
        debug_assert_eq!(self.rows, v.len());
        let mut result = vec![T::ZERO; self.cols];
        self.iter_rows().zip(v).for_each(|(row, &scalar)| {
            result
                .iter_mut()
                .zip(row)
                .for_each(|(acc, &x)| *acc = modulus.reduce_mul_add(x, scalar, *acc));
        });
        result
    }
}

impl Matrix<u64> {
    /// Generates a random [`Matrix<u64>`] whose entries are uniformly distributed in `[0, modulus)`.
    #[inline]
    pub fn random<R>(rows: usize, cols: usize, modulus: PrimeModulus, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self {
            rows,
            cols,
            data: sample_uniform_values(modulus, rows * cols, rng),
        }
    }
}
