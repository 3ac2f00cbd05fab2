//! API trait for the calculator service

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::HistoryEntry;

/// Calculator API trait
///
/// In-process consumers resolve an implementation of this trait instead of
/// talking to the domain service directly. Operation tags are taken as
/// strings so callers get `CalculatorError::UnknownOperation` rather than
/// having to parse tags themselves.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Evaluate one operation and record it in the history on success.
    ///
    /// # Errors
    /// Returns the `CalculatorError` kind that rejected the input.
    async fn evaluate(&self, operation: &str, operands: &[f64]) -> Result<f64, CalculatorError>;

    /// Snapshot of the history, oldest entry first.
    ///
    /// # Errors
    /// The local implementation never fails.
    async fn history(&self) -> Result<Vec<HistoryEntry>, CalculatorError>;

    /// Drop every history entry.
    ///
    /// # Errors
    /// The local implementation never fails.
    async fn clear_history(&self) -> Result<(), CalculatorError>;
}
