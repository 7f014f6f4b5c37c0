// ============================================================================
// Operand
// The numeric types accepted by the arithmetic operations
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A numeric value the arithmetic operations can act on.
///
/// Addition, subtraction and multiplication use the type's own operators, so
/// they inherit its native overflow and rounding behavior. Division goes
/// through [`Operand::true_div`], which produces a [`Operand::Quotient`]
/// instead of `Self` so that integer inputs never truncate.
///
/// | Operand            | Quotient  |
/// |--------------------|-----------|
/// | any primitive int  | `f64`     |
/// | `f32`              | `f32`     |
/// | `f64`              | `f64`     |
/// | `Decimal`          | `Decimal` |
///
/// # Precision
/// Integers are widened to `f64` before dividing. Magnitudes above 2^53 are
/// rounded to the nearest representable double first, so the quotient of two
/// very large `i64`/`u64`/`i128` values is approximate.
///
/// # Panics
/// Overflow is not reported as an error. Primitive integer `+`, `-` and `*`
/// panic on overflow in debug builds and wrap in release builds. `Decimal`
/// panics on overflow in every operator, including [`Operand::true_div`].
/// Floats overflow to infinity.
pub trait Operand:
    Copy + PartialEq + fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Result type of true division.
    type Quotient: Copy + PartialEq + fmt::Debug;

    /// The additive identity.
    const ZERO: Self;

    /// Returns true if this value is zero.
    ///
    /// For floats, `-0.0` is zero and NaN is not.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Divide without checking the divisor.
    ///
    /// Callers must reject a zero `rhs` first; see [`crate::ops::divide`].
    ///
    /// # Panics
    /// Only for `Decimal`, when the quotient overflows.
    fn true_div(self, rhs: Self) -> Self::Quotient;
}

macro_rules! int_operand_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                type Quotient = f64;

                const ZERO: Self = 0;

                #[inline(always)]
                fn true_div(self, rhs: Self) -> f64 {
                    self as f64 / rhs as f64
                }
            }
        )*
    };
}

macro_rules! float_operand_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                type Quotient = $t;

                const ZERO: Self = 0.0;

                #[inline(always)]
                fn true_div(self, rhs: Self) -> $t {
                    self / rhs
                }
            }
        )*
    };
}

int_operand_impl!(i8, i16, i32, i64, i128, isize);
int_operand_impl!(u8, u16, u32, u64, u128, usize);
float_operand_impl!(f32, f64);

impl Operand for Decimal {
    type Quotient = Decimal;

    const ZERO: Self = Decimal::ZERO;

    /// # Panics
    /// Panics if the quotient exceeds `Decimal::MAX`, like `Decimal`'s own
    /// `/` operator.
    #[inline]
    fn true_div(self, rhs: Self) -> Decimal {
        self / rhs
    }
}
