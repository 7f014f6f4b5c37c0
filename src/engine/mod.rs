// ============================================================================
// Engine Module
// Calculator service and its factory
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
