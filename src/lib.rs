// ============================================================================
// Calculator Library
// Stateless arithmetic operations with a guarded division path
// ============================================================================

//! # Calculator
//!
//! Addition, subtraction, multiplication and true division over numeric
//! pairs. Division by zero is the only failure and is reported as
//! [`ArithmeticError::InvalidOperation`](numeric::ArithmeticError).
//!
//! ## Features
//!
//! - **Generic free functions** in [`ops`] over any [`Operand`](numeric::Operand)
//!   (primitive integers, `f32`, `f64`, `rust_decimal::Decimal`)
//! - **True division**: integer operands divide into `f64`, never truncating
//! - **Calculator service** over `f64` that reports evaluations to a pluggable
//!   [`EventHandler`](interfaces::EventHandler)
//! - **No shared mutable state**: every call is independent and thread-safe
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//! use std::sync::Arc;
//!
//! // Free functions
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(subtract(5, -3), 8);
//! assert_eq!(multiply(-3, -4), 12);
//! assert_eq!(divide(10, -2), Ok(-5.0));
//! assert_eq!(divide(10, 0), Err(ArithmeticError::InvalidOperation));
//!
//! // Service with event reporting
//! let calc = Calculator::new(CalculatorConfig::new("demo"), Arc::new(LoggingEventHandler));
//! assert_eq!(calc.evaluate(Operation::Divide, 1.0, 4.0), Ok(0.25));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, Operation};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, OperationEvent,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, Operand};
    pub use crate::ops::{add, divide, multiply, subtract};
}
