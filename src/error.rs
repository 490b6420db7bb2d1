use thiserror::Error;

/// Failures reported by table construction, element access and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Non-positive or non-square dimensions at construction.
    #[error("Invalid dimensions: {0}")]
    InvalidDimension(String),

    /// The table has no backing storage.
    #[error("Table is not initialized")]
    Uninitialized,

    /// 1-based index outside `1..=rows` / `1..=cols`.
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} table")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand or bulk-set shapes do not line up.
    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Result does not fit the scalar kind (decimal mantissa).
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Scalar kind outside the supported set.
    #[error("Unsupported scalar type: {0}")]
    UnsupportedType(String),
}

pub type Result<T> = std::result::Result<T, MathError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::IndexOutOfRange {
            row: 4,
            col: 1,
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "Index (4, 1) out of range for a 3x3 table");

        let err = MathError::DimensionMismatch {
            expected: (2, 3),
            found: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected (2, 3), found (3, 2)"
        );

        assert_eq!(
            MathError::Overflow("multiply").to_string(),
            "Arithmetic overflow in multiply"
        );
        assert_eq!(
            MathError::UnsupportedType("u8".into()).to_string(),
            "Unsupported scalar type: u8"
        );
    }
}
