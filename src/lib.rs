//! Dense determinants and matrices over a closed set of scalar kinds.
//!
//! [`Determinant`] is evaluated by recursive cofactor expansion and
//! [`Matrix`] reduces to row-echelon form by division-free Gauss elimination.
//! Element access is 1-based on both.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod determinant;
    pub mod matrix;
    pub mod table;
}

pub mod error;
pub mod scalar;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use error::{MathError, Result};
pub use matrix::determinant::Determinant;
pub use matrix::matrix::Matrix;
pub use matrix::table::Table;
pub use scalar::{Scalar, ScalarKind};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::scalar_kind, m)?)?;
    m.add_class::<python::MatrixI64>()?;
    m.add_class::<python::MatrixF64>()?;
    m.add_class::<python::DeterminantI64>()?;
    m.add_class::<python::DeterminantF64>()?;
    Ok(())
}
