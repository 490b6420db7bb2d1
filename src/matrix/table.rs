use crate::error::{MathError, Result};
use crate::scalar::{Scalar, ScalarKind};
use crate::utils::list_shape;

/// Dense row-major table with a 1-based element API.
///
/// Storage is always 0-based; `get`/`set` translate at the boundary.
pub trait Table<T: Scalar>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn cells(&self) -> &[T];
    fn cells_mut(&mut self) -> &mut [T];

    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// Storage offset of the 1-based `(i, j)`.
    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if self.is_empty() {
            return Err(MathError::Uninitialized);
        }
        if i < 1 || j < 1 || i > self.rows() || j > self.cols() {
            return Err(MathError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok((i - 1) * self.cols() + (j - 1))
    }

    fn get(&self, i: usize, j: usize) -> Result<T> {
        let offset = self.offset(i, j)?;
        Ok(self.cells()[offset])
    }

    fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        let offset = self.offset(i, j)?;
        self.cells_mut()[offset] = value;
        Ok(())
    }

    /// Overwrite every element; `lines` must match the table's shape exactly.
    fn set_all(&mut self, lines: &[Vec<T>]) -> Result<()> {
        if self.is_empty() {
            return Err(MathError::Uninitialized);
        }
        let expected = (self.rows(), self.cols());
        match list_shape(lines) {
            Some(shape) if shape == expected => {}
            shape => {
                return Err(MathError::DimensionMismatch {
                    expected,
                    found: shape.unwrap_or((
                        lines.len(),
                        lines.iter().map(|l| l.len()).max().unwrap_or(0),
                    )),
                })
            }
        }

        for (target, value) in self.cells_mut().iter_mut().zip(lines.iter().flatten()) {
            *target = *value;
        }
        Ok(())
    }

    /// Row-major, 0-based deep copy of the storage.
    fn to_list(&self) -> Vec<Vec<T>> {
        if self.is_empty() {
            return vec![];
        }
        self.cells()
            .chunks(self.cols())
            .map(|line| line.to_vec())
            .collect()
    }
}
