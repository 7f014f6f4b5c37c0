// ============================================================================
// Arithmetic Errors
// Error types for the arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur while evaluating an arithmetic operation.
///
/// Division by zero is the only failing case; addition, subtraction and
/// multiplication are total.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Attempted division by zero
    #[error("Cannot divide by zero")]
    InvalidOperation,
}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ArithmeticError::InvalidOperation.to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ArithmeticError::InvalidOperation);
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert!(err.source().is_none());
    }
}
