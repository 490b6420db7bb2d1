use crate::error::MathError;
use crate::matrix::determinant::Determinant;
use crate::matrix::matrix::Matrix;
use crate::matrix::table::Table;
use crate::scalar::ScalarKind;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MathError> for PyErr {
    fn from(error: MathError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

/// Canonical name of a scalar kind, raises for unsupported kinds.
#[pyfunction]
pub fn scalar_kind(name: &str) -> PyResult<String> {
    Ok(name.parse::<ScalarKind>()?.to_string())
}

// Python classes can't be generic, one pair per exported scalar kind
macro_rules! impl_py_tables {
    ($matrix:ident, $determinant:ident, $element:ty) => {
        #[pyclass]
        #[derive(Debug, Clone)]
        pub struct $matrix {
            pub inner: Matrix<$element>,
        }

        #[pymethods]
        impl $matrix {
            #[new]
            pub fn new(rows: usize, cols: usize) -> PyResult<Self> {
                Ok(Self {
                    inner: Matrix::new(rows, cols)?,
                })
            }

            #[classmethod]
            pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<$element>>) -> PyResult<Self> {
                Ok(Self {
                    inner: Matrix::from_list(lines)?,
                })
            }

            #[classmethod]
            pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
                Ok(Self {
                    inner: Matrix::identity(n)?,
                })
            }

            pub fn to_list(&self) -> Vec<Vec<$element>> {
                self.inner.to_list()
            }

            #[getter]
            pub fn rows(&self) -> usize {
                self.inner.rows()
            }

            #[getter]
            pub fn cols(&self) -> usize {
                self.inner.cols()
            }

            #[getter]
            pub fn kind(&self) -> String {
                self.inner.kind().to_string()
            }

            pub fn get(&self, i: usize, j: usize) -> PyResult<$element> {
                Ok(self.inner.get(i, j)?)
            }

            pub fn set(&mut self, i: usize, j: usize, value: $element) -> PyResult<()> {
                Ok(self.inner.set(i, j, value)?)
            }

            #[getter]
            #[allow(non_snake_case)]
            pub fn T(&self) -> Self {
                Self {
                    inner: self.inner.transpose(),
                }
            }

            pub fn gauss_elimination(&self) -> PyResult<Self> {
                Ok(Self {
                    inner: self.inner.gauss_elimination()?,
                })
            }

            pub fn scale(&self, scalar: $element) -> PyResult<Self> {
                Ok(Self {
                    inner: self.inner.scale(scalar)?,
                })
            }

            pub fn __add__(&self, rhs: &$matrix) -> PyResult<Self> {
                Ok(Self {
                    inner: self.inner.add(&rhs.inner)?,
                })
            }

            pub fn __mul__(&self, rhs: &$matrix) -> PyResult<Self> {
                Ok(Self {
                    inner: self.inner.multiply(&rhs.inner)?,
                })
            }

            pub fn __rmul__(&self, scalar: $element) -> PyResult<Self> {
                self.scale(scalar)
            }

            pub fn __eq__(&self, rhs: &$matrix) -> bool {
                self.inner == rhs.inner
            }

            pub fn __str__(&self) -> String {
                self.inner.to_string()
            }
        }

        #[pyclass]
        #[derive(Debug, Clone)]
        pub struct $determinant {
            pub inner: Determinant<$element>,
        }

        #[pymethods]
        impl $determinant {
            #[new]
            pub fn new(order: usize) -> PyResult<Self> {
                Ok(Self {
                    inner: Determinant::new(order)?,
                })
            }

            #[classmethod]
            pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<$element>>) -> PyResult<Self> {
                Ok(Self {
                    inner: Determinant::from_list(lines)?,
                })
            }

            pub fn to_list(&self) -> Vec<Vec<$element>> {
                self.inner.to_list()
            }

            #[getter]
            pub fn order(&self) -> usize {
                self.inner.order()
            }

            pub fn get(&self, i: usize, j: usize) -> PyResult<$element> {
                Ok(self.inner.get(i, j)?)
            }

            pub fn set(&mut self, i: usize, j: usize, value: $element) -> PyResult<()> {
                Ok(self.inner.set(i, j, value)?)
            }

            pub fn minor(&self, i: usize, j: usize) -> Option<$determinant> {
                self.inner.minor(i, j).map(|inner| Self { inner })
            }

            pub fn cofactor(&self, i: usize, j: usize) -> PyResult<$element> {
                Ok(self.inner.cofactor(i, j)?)
            }

            pub fn value(&self) -> PyResult<$element> {
                Ok(self.inner.value()?)
            }

            pub fn __eq__(&self, rhs: &$determinant) -> bool {
                self.inner == rhs.inner
            }

            pub fn __str__(&self) -> String {
                self.inner.to_string()
            }
        }
    };
}

impl_py_tables!(MatrixI64, DeterminantI64, i64);
impl_py_tables!(MatrixF64, DeterminantF64, f64);
