// ============================================================================
// Operation
// Typed vocabulary for the four arithmetic operations
// ============================================================================

use crate::numeric::ArithmeticResult;
use crate::ops;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol of the operation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Whether this operation has an error path.
    pub const fn can_fail(self) -> bool {
        matches!(self, Operation::Divide)
    }

    /// Evaluate the operation over two doubles.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for division by zero.
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> ArithmeticResult<f64> {
        match self {
            Operation::Add => Ok(ops::add(a, b)),
            Operation::Subtract => Ok(ops::subtract(a, b)),
            Operation::Multiply => Ok(ops::multiply(a, b)),
            Operation::Divide => ops::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
