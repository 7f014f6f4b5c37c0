// ============================================================================
// Arithmetic Operations
// Pure, stateless add / subtract / multiply / divide
// ============================================================================

use crate::numeric::{ArithmeticError, ArithmeticResult, Operand};

/// Add two numbers.
///
/// # Panics
/// Overflow follows the operand type's own operator: primitive integers
/// panic in debug builds and wrap in release builds, `Decimal` panics when
/// the result exceeds `Decimal::MAX`/`Decimal::MIN`. Floats saturate to
/// infinity and never panic.
///
/// # Example
/// ```
/// use calculator::ops::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(0.5, 0.25), 0.75);
/// ```
#[inline]
pub fn add<T: Operand>(a: T, b: T) -> T {
    a + b
}

/// Subtract `b` from `a`.
///
/// # Panics
/// Overflow follows the operand type's own operator: primitive integers
/// panic in debug builds and wrap in release builds, `Decimal` panics when
/// the result exceeds `Decimal::MAX`/`Decimal::MIN`. Floats saturate to
/// infinity and never panic.
#[inline]
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a - b
}

/// Multiply two numbers.
///
/// # Panics
/// Overflow follows the operand type's own operator: primitive integers
/// panic in debug builds and wrap in release builds, `Decimal` panics when
/// the result exceeds `Decimal::MAX`/`Decimal::MIN`. Floats saturate to
/// infinity and never panic.
#[inline]
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a * b
}

/// Divide `a` by `b` (true division).
///
/// Integer inputs produce an `f64` quotient; see [`Operand`] for the result
/// type of each operand.
///
/// # Errors
/// Returns [`ArithmeticError::InvalidOperation`] if `b` is zero. The divisor
/// is checked before any division takes place.
///
/// # Panics
/// Integer and float operands never panic here. A `Decimal` quotient that
/// exceeds `Decimal::MAX` in magnitude (e.g. `Decimal::MAX / 0.1`) panics
/// inside `rust_decimal`, like its `/` operator.
///
/// # Example
/// ```
/// use calculator::ops::divide;
/// use calculator::numeric::ArithmeticError;
///
/// assert_eq!(divide(10, -2), Ok(-5.0));
/// assert_eq!(divide(7, 2), Ok(3.5));
/// assert_eq!(divide(10, 0), Err(ArithmeticError::InvalidOperation));
/// ```
#[inline]
pub fn divide<T: Operand>(a: T, b: T) -> ArithmeticResult<T::Quotient> {
    if b.is_zero() {
        return Err(ArithmeticError::InvalidOperation);
    }
    Ok(a.true_div(b))
}
