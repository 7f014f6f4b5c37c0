// ============================================================================
// Calculator Configuration
// Settings for a Calculator service instance
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default label for a calculator instance
pub const DEFAULT_NAME: &str = "calculator";

/// Configuration for creating a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CalculatorConfig {
    /// Label attached to every event and log line (e.g., "billing", "pricing")
    pub name: String,

    /// Whether evaluations are reported to the event handler
    pub emit_events: bool,
}

impl CalculatorConfig {
    /// Create a new configuration with events enabled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emit_events: true,
        }
    }

    /// Builder method: Enable or disable event emission
    pub fn with_events(mut self, emit_events: bool) -> Self {
        self.emit_events = emit_events;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Calculator name cannot be empty".to_string());
        }

        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid calculator config: {e}"))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CalculatorConfig::new("pricing");
        assert_eq!(config.name, "pricing");
        assert!(config.emit_events);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.name, DEFAULT_NAME);
        assert!(config.emit_events);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new("quiet").with_events(false);
        assert!(!config.emit_events);
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::new("").validate().is_err());
        assert!(CalculatorConfig::new("   ").validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = CalculatorConfig::from_json(r#"{"name":"billing"}"#).unwrap();
        assert_eq!(config.name, "billing");
        assert!(config.emit_events);

        let config = CalculatorConfig::from_json(r#"{"emit_events":false}"#).unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert!(!config.emit_events);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(CalculatorConfig::from_json("not json").is_err());
        assert!(CalculatorConfig::from_json(r#"{"name":""}"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_misspelled_field() {
        let err = CalculatorConfig::from_json(r#"{"nmae":"billing"}"#).unwrap_err();
        assert!(err.contains("nmae"), "unexpected error: {err}");
    }
}
