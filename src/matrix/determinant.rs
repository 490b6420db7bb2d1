use crate::error::{MathError, Result};
use crate::matrix::table::Table;
use crate::scalar::Scalar;
use crate::utils::{list_shape, render_rows};
use log::debug;
use std::fmt;

/// Square table of order `N`, evaluated by cofactor expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Determinant<T> {
    order: usize,
    cells: Vec<T>,
}

impl<T> Default for Determinant<T> {
    /// Order-0 table without storage.
    fn default() -> Self {
        Determinant {
            order: 0,
            cells: vec![],
        }
    }
}

impl<T: Scalar> Table<T> for Determinant<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        match list_shape(&lines) {
            Some((rows, cols)) if rows >= 1 && rows == cols => Ok(Determinant {
                order: rows,
                cells: lines.into_iter().flatten().collect(),
            }),
            _ => Err(MathError::InvalidDimension(
                "array must be square with a side of at least 1".into(),
            )),
        }
    }

    fn rows(&self) -> usize {
        self.order
    }

    fn cols(&self) -> usize {
        self.order
    }

    fn cells(&self) -> &[T] {
        &self.cells
    }

    fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T: Scalar> Determinant<T> {
    /// Zero-filled table of the given order.
    pub fn new(order: usize) -> Result<Determinant<T>> {
        if order < 1 {
            return Err(MathError::InvalidDimension(format!(
                "order must be at least 1, got {}",
                order
            )));
        }
        Ok(Determinant {
            order,
            cells: vec![T::zero(); order * order],
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.order + col]
    }

    /// Table left after deleting row `i` and column `j` (1-based).
    ///
    /// `None` for an order-1 table or when `i`/`j` is out of range.
    pub fn minor(&self, i: usize, j: usize) -> Option<Determinant<T>> {
        if self.order <= 1 || i < 1 || j < 1 || i > self.order || j > self.order {
            return None;
        }
        Some(self.minor_unchecked(i, j))
    }

    fn minor_unchecked(&self, i: usize, j: usize) -> Determinant<T> {
        let n = self.order - 1;
        let mut cells = Vec::with_capacity(n * n);
        for m in 1..=n {
            let p = if m < i { m } else { m + 1 };
            for k in 1..=n {
                let q = if k < j { k } else { k + 1 };
                cells.push(self.at(p - 1, q - 1));
            }
        }
        Determinant { order: n, cells }
    }

    /// Signed cofactor `(-1)^(i+j) * minor(i, j).value()`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T> {
        self.offset(i, j)?;
        if self.order == 1 {
            return Ok(T::one());
        }
        let value = self.minor_unchecked(i, j).expand()?;
        if (i + j) % 2 == 0 {
            Ok(value)
        } else {
            T::zero().try_subtract(value)
        }
    }

    /// Determinant by Laplace expansion along the first row. O(N!) operations.
    pub fn value(&self) -> Result<T> {
        if self.is_empty() {
            return Err(MathError::Uninitialized);
        }
        debug!("Expanding determinant of order {}", self.order);
        self.expand()
    }

    fn expand(&self) -> Result<T> {
        match self.order {
            1 => Ok(self.at(0, 0)),
            2 => {
                let a = self.at(0, 0).try_multiply(self.at(1, 1))?;
                let b = self.at(0, 1).try_multiply(self.at(1, 0))?;
                a.try_subtract(b)
            }
            n => (1..=n).try_fold(T::zero(), |sum, i| {
                let term = self
                    .at(0, i - 1)
                    .try_multiply(self.minor_unchecked(1, i).expand()?)?;
                if (1 + i) % 2 == 0 {
                    sum.try_add(term)
                } else {
                    sum.try_subtract(term)
                }
            }),
        }
    }
}

impl<T: Scalar> fmt::Display for Determinant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(&self.cells, self.order))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
