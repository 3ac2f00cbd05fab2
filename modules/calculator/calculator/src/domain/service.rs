//! Domain service for calculator
//!
//! Evaluates operations and records successful ones in the history.
//! One instance is created at startup and shared by every adapter.

use calculator_sdk::{CalculatorError, HistoryEntry, Operation};
use chrono::Utc;
use tracing::{debug, instrument};

use crate::config::CalculatorConfig;
use crate::domain::arithmetic;
use crate::domain::history::History;

/// Domain service that performs calculations and owns the history.
#[derive(Debug, Default)]
pub struct Service {
    history: History,
}

impl Service {
    /// Create a new service with an empty history.
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            history: History::new(config.history_limit),
        }
    }

    /// Evaluate `operation` over `operands`.
    ///
    /// On success the calculation is appended to the history before the
    /// result is returned. Failures leave the history untouched.
    ///
    /// # Errors
    /// Returns the validation error for invalid input; see
    /// [`arithmetic::evaluate`].
    #[instrument(skip(self))]
    pub fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<f64, CalculatorError> {
        let result = arithmetic::evaluate(operation, operands).inspect_err(|e| {
            debug!(error = %e, "evaluation rejected");
        })?;

        self.history.push(HistoryEntry {
            operation,
            a: operands[0],
            b: operands.get(1).copied(),
            result,
            timestamp: Utc::now(),
        });

        debug!(result, history_len = self.history.len(), "evaluation completed");
        Ok(result)
    }

    /// Parse an operation tag and evaluate it.
    ///
    /// # Errors
    /// Returns `UnknownOperation` for an unrecognized tag, otherwise the
    /// same errors as [`Service::evaluate`].
    pub fn evaluate_tag(&self, operation: &str, operands: &[f64]) -> Result<f64, CalculatorError> {
        let operation = operation.parse::<Operation>()?;
        self.evaluate(operation, operands)
    }

    /// Snapshot of the history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Remove every history entry.
    pub fn clear_history(&self) {
        self.history.clear();
        debug!("history cleared");
    }
}
