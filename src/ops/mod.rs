// ============================================================================
// Operations Module
// The four arithmetic operations as free functions
// ============================================================================

mod arithmetic;

pub use arithmetic::{add, divide, multiply, subtract};
