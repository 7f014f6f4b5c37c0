// ============================================================================
// Calculator
// Service wrapper that evaluates operations and reports them
// ============================================================================

use crate::domain::{CalculatorConfig, Operation};
use crate::interfaces::{EventHandler, OperationEvent};
use crate::numeric::ArithmeticResult;
use crate::ops;
use chrono::Utc;
use std::sync::Arc;

/// Stateless calculator service over `f64` operands.
///
/// Holds only immutable configuration and an event handler, so a single
/// instance can be shared across threads (e.g. behind an `Arc`) and called
/// concurrently without coordination.
pub struct Calculator {
    /// Immutable configuration
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Evaluate `operation` over `a` and `b`.
    ///
    /// The result is exactly what [`Operation::apply`] returns; reporting to
    /// the event handler does not alter it.
    ///
    /// # Errors
    /// Returns `InvalidOperation` when dividing by zero.
    pub fn evaluate(&self, operation: Operation, a: f64, b: f64) -> ArithmeticResult<f64> {
        let result = operation.apply(a, b);
        self.observe(operation, a, b, &result);
        result
    }

    /// Add two numbers
    pub fn add(&self, a: f64, b: f64) -> f64 {
        let sum = ops::add(a, b);
        self.observe(Operation::Add, a, b, &Ok(sum));
        sum
    }

    /// Subtract `b` from `a`
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        let difference = ops::subtract(a, b);
        self.observe(Operation::Subtract, a, b, &Ok(difference));
        difference
    }

    /// Multiply two numbers
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        let product = ops::multiply(a, b);
        self.observe(Operation::Multiply, a, b, &Ok(product));
        product
    }

    /// Divide `a` by `b`
    ///
    /// # Errors
    /// Returns `InvalidOperation` if `b` is zero.
    pub fn divide(&self, a: f64, b: f64) -> ArithmeticResult<f64> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Log the outcome and forward it to the event handler
    fn observe(&self, operation: Operation, a: f64, b: f64, result: &ArithmeticResult<f64>) {
        match result {
            Ok(value) => tracing::trace!(
                calculator = %self.config.name,
                %operation,
                lhs = a,
                rhs = b,
                result = *value,
                "operation evaluated"
            ),
            Err(err) => tracing::debug!(
                calculator = %self.config.name,
                %operation,
                lhs = a,
                rhs = b,
                error = %err,
                "operation rejected"
            ),
        }

        if !self.config.emit_events {
            return;
        }

        let timestamp = Utc::now();
        let calculator = self.config.name.clone();
        let event = match result {
            Ok(value) => OperationEvent::Evaluated {
                calculator,
                operation,
                lhs: a,
                rhs: b,
                result: *value,
                timestamp,
            },
            Err(err) => OperationEvent::Rejected {
                calculator,
                operation,
                lhs: a,
                rhs: b,
                reason: err.to_string(),
                timestamp,
            },
        };
        self.event_handler.on_event(event);
    }

    /// Get the calculator name
    pub fn get_name(&self) -> &str {
        &self.config.name
    }

    /// Get the configuration
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
