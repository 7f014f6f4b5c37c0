// ============================================================================
// Domain Models Module
// Operation vocabulary and service configuration
// ============================================================================

pub mod config;
pub mod operation;

pub use config::CalculatorConfig;
pub use operation::Operation;
