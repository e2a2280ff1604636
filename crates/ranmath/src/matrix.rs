//! Column-major matrix storage.
//!
//! A [`Matrix<T, C, R>`] holds `C` columns of `R` components each, for every
//! shape from 2x2 through 4x4. Matrices are storage only: they can be built,
//! indexed by column and converted, but carry no arithmetic.

use bytemuck::{Pod, TransparentWrapper, Zeroable};
use snafu::ensure;

use crate::{error::LengthMismatchSnafu, Error, Scalar, Vector};

/// A matrix of `C` columns by `R` rows, stored column-major.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const C: usize, const R: usize> {
    /// The columns, in order.
    pub raw: [[T; R]; C],
}

// SAFETY: `Matrix<T, C, R>` is `repr(transparent)` over `[[T; R]; C]`, which
// has no padding between elements.
unsafe impl<T: Zeroable, const C: usize, const R: usize> Zeroable for Matrix<T, C, R> {}
unsafe impl<T: Pod, const C: usize, const R: usize> Pod for Matrix<T, C, R> {}

/// matrix_aliases! generates the `Mat<C>x<R>` shape aliases.
macro_rules! matrix_aliases {
    ($(($c:literal, $r:literal)),+) => {
        paste::paste! {
            $(
                #[doc = concat!("A ", $c, " column by ", $r, " row matrix.")]
                pub type [<Mat $c x $r>]<T> = Matrix<T, $c, $r>;
            )+
        }
    };
}
matrix_aliases!(
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 2),
    (3, 3),
    (3, 4),
    (4, 2),
    (4, 3),
    (4, 4)
);

/// A square 2x2 matrix.
pub type Mat2<T> = Mat2x2<T>;
/// A square 3x3 matrix.
pub type Mat3<T> = Mat3x3<T>;
/// A square 4x4 matrix.
pub type Mat4<T> = Mat4x4<T>;

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    pub const fn from_raw(raw: [[T; R]; C]) -> Self {
        Matrix { raw }
    }

    pub fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        Matrix {
            raw: cols.map(|col| col.raw),
        }
    }

    /// The columns as vectors.
    pub fn cols(&self) -> &[Vector<T, R>] {
        Vector::wrap_slice(&self.raw)
    }

    /// The columns as write-through vectors.
    pub fn cols_mut(&mut self) -> &mut [Vector<T, R>] {
        Vector::wrap_slice_mut(&mut self.raw)
    }

    /// Column `index` as a write-through vector.
    ///
    /// # Panics
    /// Panics if `index >= C`.
    pub fn col_mut(&mut self, index: usize) -> &mut Vector<T, R> {
        Vector::wrap_mut(&mut self.raw[index])
    }
}

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Every element set to `value`.
    pub const fn splat(value: T) -> Self {
        Matrix {
            raw: [[value; R]; C],
        }
    }

    /// Column `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index >= C`.
    pub fn col(&self, index: usize) -> Vector<T, R> {
        Vector::new(self.raw[index])
    }

    /// Row `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index >= R`.
    pub fn row(&self, index: usize) -> Vector<T, C> {
        Vector::new(self.raw.map(|col| col[index]))
    }

    /// The element at `col`, `row`, if both are in range.
    pub fn get(&self, col: usize, row: usize) -> Option<T> {
        self.raw.get(col)?.get(row).copied()
    }
}

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    pub const ZERO: Self = Self::splat(T::ZERO);
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Ones on the diagonal, zero elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::ZERO;
        for i in 0..N {
            m.raw[i][i] = T::ONE;
        }
        m
    }
}

impl<T: Copy + Default, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T, const C: usize, const R: usize> core::ops::Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn index(&self, index: usize) -> &Vector<T, R> {
        Vector::wrap_ref(&self.raw[index])
    }
}

impl<T, const C: usize, const R: usize> core::ops::IndexMut<usize> for Matrix<T, C, R> {
    fn index_mut(&mut self, index: usize) -> &mut Vector<T, R> {
        self.col_mut(index)
    }
}

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    fn from(raw: [[T; R]; C]) -> Self {
        Matrix { raw }
    }
}

impl<T, const C: usize, const R: usize> From<[Vector<T, R>; C]> for Matrix<T, C, R> {
    fn from(cols: [Vector<T, R>; C]) -> Self {
        Matrix::from_cols(cols)
    }
}

impl<T: Copy, const C: usize, const R: usize> TryFrom<&[T]> for Matrix<T, C, R> {
    type Error = Error;

    /// Builds a matrix from `C * R` elements in column-major order.
    fn try_from(elements: &[T]) -> Result<Self, Error> {
        ensure!(
            elements.len() == C * R,
            LengthMismatchSnafu {
                expected: C * R,
                actual: elements.len()
            }
        );
        Ok(Matrix {
            raw: core::array::from_fn(|c| core::array::from_fn(|r| elements[c * R + r])),
        })
    }
}

#[cfg(feature = "glam")]
macro_rules! impl_from_glam_matrix {
    ($glam_ty:ty, $scalar:ty, $n:literal) => {
        impl From<$glam_ty> for Matrix<$scalar, $n, $n> {
            fn from(m: $glam_ty) -> Self {
                Matrix::from_raw(m.to_cols_array_2d())
            }
        }

        impl From<Matrix<$scalar, $n, $n>> for $glam_ty {
            fn from(m: Matrix<$scalar, $n, $n>) -> Self {
                <$glam_ty>::from_cols_array_2d(&m.raw)
            }
        }
    };
}

#[cfg(feature = "glam")]
mod glam_impls {
    use super::Matrix;

    impl_from_glam_matrix!(glam::Mat2, f32, 2);
    impl_from_glam_matrix!(glam::Mat3, f32, 3);
    impl_from_glam_matrix!(glam::Mat4, f32, 4);
    impl_from_glam_matrix!(glam::DMat2, f64, 2);
    impl_from_glam_matrix!(glam::DMat3, f64, 3);
    impl_from_glam_matrix!(glam::DMat4, f64, 4);
}
