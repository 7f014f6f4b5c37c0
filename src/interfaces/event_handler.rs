// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator evaluations
// ============================================================================

use crate::domain::Operation;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationEvent {
    /// Operation evaluated successfully
    Evaluated {
        calculator: String,
        operation: Operation,
        lhs: f64,
        rhs: f64,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected with reason
    Rejected {
        calculator: String,
        operation: Operation,
        lhs: f64,
        rhs: f64,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl OperationEvent {
    /// The operation this event describes
    pub fn operation(&self) -> Operation {
        match self {
            OperationEvent::Evaluated { operation, .. }
            | OperationEvent::Rejected { operation, .. } => *operation,
        }
    }

    /// Whether this event reports a failed evaluation
    pub fn is_rejection(&self) -> bool {
        matches!(self, OperationEvent::Rejected { .. })
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an operation event
    fn on_event(&self, event: OperationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<OperationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: OperationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
