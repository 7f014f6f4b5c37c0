// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for evaluation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use calculator::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new("pricing");
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.add(2.0, 3.0), 5.0);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;

    tracing::debug!(
        calculator = %config.name,
        emit_events = config.emit_events,
        "calculator created"
    );

    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use calculator::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new("billing")
///     .with_events(false)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert!(calc.divide(1.0, 0.0).is_err());
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder for the named calculator
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(name),
        }
    }

    /// Enable or disable event emission
    pub fn with_events(mut self, emit_events: bool) -> Self {
        self.config.emit_events = emit_events;
        self
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
