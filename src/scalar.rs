//! Scalar arithmetic shared by every table type.
//!
//! The supported kinds form a closed set: `i16`, `i32`, `i64`, `f32`, `f64` and
//! [`Decimal`]. Each operation is a straight pass-through to the native
//! arithmetic of the kind: fixed-width integers wrap, floats follow IEEE
//! rounding and decimals follow `rust_decimal` (banker's rounding of the scale).

use crate::error::MathError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

mod private {
    pub trait Sealed {}
}

/// The supported scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Decimal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Decimal => "decimal",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::Int16 | ScalarKind::Int32 | ScalarKind::Int64
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, MathError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int16" | "i16" => Ok(ScalarKind::Int16),
            "int32" | "i32" => Ok(ScalarKind::Int32),
            "int64" | "i64" => Ok(ScalarKind::Int64),
            "float32" | "f32" | "single" => Ok(ScalarKind::Float32),
            "float64" | "f64" | "double" => Ok(ScalarKind::Float64),
            "decimal" => Ok(ScalarKind::Decimal),
            _ => Err(MathError::UnsupportedType(s.to_owned())),
        }
    }
}

/// Element type of a table.
///
/// Sealed: only the kinds listed in [`ScalarKind`] implement it, so a table over
/// any other type does not compile.
pub trait Scalar: Copy + PartialEq + fmt::Debug + fmt::Display + private::Sealed {
    const KIND: ScalarKind;

    fn zero() -> Self;
    fn one() -> Self;

    fn add(self, rhs: Self) -> Self;
    fn subtract(self, rhs: Self) -> Self;
    fn multiply(self, rhs: Self) -> Self;

    /// Checked variants used by the tables. Only decimals can fail; the
    /// other kinds wrap or round natively.
    fn try_add(self, rhs: Self) -> crate::error::Result<Self> {
        Ok(self.add(rhs))
    }

    fn try_subtract(self, rhs: Self) -> crate::error::Result<Self> {
        Ok(self.subtract(rhs))
    }

    fn try_multiply(self, rhs: Self) -> crate::error::Result<Self> {
        Ok(self.multiply(rhs))
    }

    /// Equality within `epsilon`. Exact for integers and decimals.
    fn is_close(self, rhs: Self, epsilon: f64) -> bool;

    fn negate(self) -> Self {
        Self::zero().subtract(self)
    }
}

macro_rules! impl_scalar_int {
    ($type:ty, $kind:expr) => {
        impl private::Sealed for $type {}

        impl Scalar for $type {
            const KIND: ScalarKind = $kind;

            #[inline(always)]
            fn zero() -> Self {
                <$type as num_traits::Zero>::zero()
            }

            #[inline(always)]
            fn one() -> Self {
                <$type as num_traits::One>::one()
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn is_close(self, rhs: Self, _epsilon: f64) -> bool {
                self == rhs
            }
        }
    };
}

macro_rules! impl_scalar_float {
    ($type:ty, $kind:expr) => {
        impl private::Sealed for $type {}

        impl Scalar for $type {
            const KIND: ScalarKind = $kind;

            #[inline(always)]
            fn zero() -> Self {
                <$type as num_traits::Zero>::zero()
            }

            #[inline(always)]
            fn one() -> Self {
                <$type as num_traits::One>::one()
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                self * rhs
            }

            fn is_close(self, rhs: Self, epsilon: f64) -> bool {
                self == rhs || ((self - rhs).abs() as f64) <= epsilon
            }
        }
    };
}

impl_scalar_int!(i16, ScalarKind::Int16);
impl_scalar_int!(i32, ScalarKind::Int32);
impl_scalar_int!(i64, ScalarKind::Int64);
impl_scalar_float!(f32, ScalarKind::Float32);
impl_scalar_float!(f64, ScalarKind::Float64);

impl private::Sealed for Decimal {}

// The plain operators panic on mantissa overflow, the checked ones report it.
impl Scalar for Decimal {
    const KIND: ScalarKind = ScalarKind::Decimal;

    #[inline(always)]
    fn zero() -> Self {
        <Decimal as num_traits::Zero>::zero()
    }

    #[inline(always)]
    fn one() -> Self {
        <Decimal as num_traits::One>::one()
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn try_add(self, rhs: Self) -> crate::error::Result<Self> {
        self.checked_add(rhs).ok_or(MathError::Overflow("add"))
    }

    #[inline(always)]
    fn try_subtract(self, rhs: Self) -> crate::error::Result<Self> {
        self.checked_sub(rhs).ok_or(MathError::Overflow("subtract"))
    }

    #[inline(always)]
    fn try_multiply(self, rhs: Self) -> crate::error::Result<Self> {
        self.checked_mul(rhs).ok_or(MathError::Overflow("multiply"))
    }

    fn is_close(self, rhs: Self, _epsilon: f64) -> bool {
        self == rhs
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
