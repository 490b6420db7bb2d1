use crate::error::{MathError, Result};
use crate::matrix::table::Table;
use crate::scalar::Scalar;
use crate::utils::{list_shape, render_rows};
use log::{debug, trace};
use rust_decimal::Decimal;
use std::fmt;
use std::ops;

/// Dense `rows x cols` table.
///
/// Structural operations (`transpose`, `gauss_elimination`, the arithmetic
/// operators) never touch their operands and always return a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Default for Matrix<T> {
    /// 0x0 table without storage.
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            cells: vec![],
        }
    }
}

impl<T: Scalar> Table<T> for Matrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        match list_shape(&lines) {
            Some((rows, cols)) if rows >= 1 && cols >= 1 => Ok(Matrix {
                rows,
                cols,
                cells: lines.into_iter().flatten().collect(),
            }),
            Some(_) => Err(MathError::InvalidDimension(
                "array must have at least one row and one column".into(),
            )),
            None => Err(MathError::InvalidDimension(
                "rows of the array have different lengths".into(),
            )),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cells(&self) -> &[T] {
        &self.cells
    }

    fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled `rows x cols` table.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix<T>> {
        if rows < 1 || cols < 1 {
            return Err(MathError::InvalidDimension(format!(
                "a {}x{} matrix has no elements",
                rows, cols
            )));
        }
        Ok(Matrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    pub fn identity(n: usize) -> Result<Matrix<T>> {
        let mut mat = Matrix::new(n, n)?;
        for i in 0..n {
            mat.cells[i * n + i] = T::one();
        }
        Ok(mat)
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    pub fn copy(&self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.to_vec(),
        }
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Row-echelon form by cross-multiplication.
    ///
    /// Each row `k` below pivot `p` becomes `row_k * a[p][p] - row_p * a[k][p]`,
    /// so no division happens and integer tables stay exact. There is no row
    /// swapping: a zero pivot turns the rows below it degenerate.
    ///
    /// Pivot steps run over the rows, so a table with two or more rows beyond
    /// its column count reads a pivot `a[p][p]` past the last column and fails
    /// with `IndexOutOfRange`.
    pub fn gauss_elimination(&self) -> Result<Matrix<T>> {
        let mut mat = self.copy();

        for j in 2..=mat.rows {
            let p = j - 1;
            if p > mat.cols {
                debug!(
                    "Gauss step {} has no pivot in a {}x{} matrix",
                    p, mat.rows, mat.cols
                );
                return Err(MathError::IndexOutOfRange {
                    row: p,
                    col: p,
                    rows: mat.rows,
                    cols: mat.cols,
                });
            }

            for k in j..=mat.rows {
                let pivot = mat.at(p - 1, p - 1);
                let factor = mat.at(k - 1, p - 1);
                for m in p..=mat.cols {
                    let a = mat.at(k - 1, m - 1).try_multiply(pivot)?;
                    let b = mat.at(p - 1, m - 1).try_multiply(factor)?;
                    mat.cells[(k - 1) * mat.cols + (m - 1)] = a.try_subtract(b)?;
                }
            }
            trace!("Gauss step {}:\n{}", p, mat);
        }

        Ok(mat)
    }

    /// Element-wise sum; both operands must have the same shape.
    pub fn add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.is_empty() || rhs.is_empty() || self.rows != rhs.rows || self.cols != rhs.cols {
            debug!(
                "Cannot add a {}x{} matrix to a {}x{} matrix",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
            return Err(MathError::DimensionMismatch {
                expected: (self.rows, self.cols),
                found: (rhs.rows, rhs.cols),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.try_add(*b))
                .collect::<Result<Vec<T>>>()?,
        })
    }

    /// Every element multiplied by `scalar`.
    pub fn scale(&self, scalar: T) -> Result<Matrix<T>> {
        if self.is_empty() {
            return Err(MathError::Uninitialized);
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|x| scalar.try_multiply(*x))
                .collect::<Result<Vec<T>>>()?,
        })
    }

    /// Matrix product; `self.cols` must equal `rhs.rows`.
    ///
    /// On a mismatch the error carries the right-hand shape that would fit,
    /// `(self.cols, rhs.cols)`, against the one passed in.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.is_empty() || rhs.is_empty() || self.cols != rhs.rows {
            debug!(
                "Cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
            return Err(MathError::DimensionMismatch {
                expected: (self.cols, rhs.cols),
                found: (rhs.rows, rhs.cols),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols).try_fold(T::zero(), |acc, k| {
                            acc.try_add(self.at(i, k).try_multiply(rhs.at(k, j))?)
                        })
                    })
                })
                .collect::<Result<Vec<T>>>()?,
        })
    }

    /// Same shape and every pair of elements within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix<T>, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_close(*b, epsilon))
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(&self.cells, self.cols))
    }
}

impl<T: Scalar> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        Matrix::add(self, rhs)
    }
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.multiply(rhs)
    }
}

impl<T: Scalar> ops::Mul<T> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: T) -> Result<Matrix<T>> {
        self.scale(rhs)
    }
}

// `scalar * &matrix` has to be spelled out per kind
macro_rules! impl_scalar_left_mul {
    ($($type:ty),*) => {
        $(
            impl ops::Mul<&Matrix<$type>> for $type {
                type Output = Result<Matrix<$type>>;

                fn mul(self, rhs: &Matrix<$type>) -> Result<Matrix<$type>> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_left_mul!(i16, i32, i64, f32, f64, Decimal);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
