// ============================================================================
// Numeric Module
// Operand abstraction and error types for the arithmetic operations
// ============================================================================
//
// This module provides:
// - Operand: the set of types the operations accept
// - ArithmeticError: the single failure kind (division by zero)
//
// Design principles:
// - Native numeric semantics, no extra rounding policy
// - Division is true division: integers divide into f64
// - The only fallible path returns Result (no panics)

mod errors;
mod operand;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use operand::Operand;
