//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).
//! `EvaluateRequest::normalize` is the only place that knows about the
//! accepted request shapes; the domain only ever sees `(Operation, &[f64])`.

use calculator_sdk::{HistoryEntry, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::ApiError;

/// Request to evaluate one operation.
///
/// Accepts either `{operation, operands}` or the legacy `{operation, a, b?}`
/// shape. When `operands` is present, `a` and `b` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EvaluateRequest {
    /// Operation tag: add, subtract, multiply, divide, power or sqrt
    #[schema(example = "add")]
    pub operation: Option<String>,
    /// Operands in order (one for sqrt, two otherwise)
    #[schema(value_type = Option<Vec<f64>>)]
    pub operands: Option<Vec<Value>>,
    /// Legacy first operand
    #[schema(value_type = Option<f64>)]
    pub a: Option<Value>,
    /// Legacy second operand (ignored for sqrt)
    #[schema(value_type = Option<f64>)]
    pub b: Option<Value>,
}

/// Canonical evaluation input produced by [`EvaluateRequest::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateCommand {
    pub operation: Operation,
    pub operands: Vec<f64>,
}

impl EvaluateRequest {
    /// Map the accepted request shapes onto the canonical form.
    ///
    /// Non-numeric, `null` or missing operand values become NaN so that the
    /// domain rejects them as `InvalidOperand` after its arity check.
    ///
    /// # Errors
    /// - `InvalidRequest` when `operation` is missing or empty
    /// - `UnknownOperation` when the tag is not recognized
    pub fn normalize(self) -> Result<EvaluateCommand, ApiError> {
        let tag = self
            .operation
            .filter(|tag| !tag.is_empty())
            .ok_or_else(|| ApiError::invalid_request("operation is required"))?;
        let operation = tag.parse::<Operation>()?;

        let operands = match self.operands {
            Some(values) => values.iter().map(operand_value).collect(),
            None => [self.a, self.b]
                .iter()
                .take(operation.arity())
                .map(|value| value.as_ref().map_or(f64::NAN, operand_value))
                .collect(),
        };

        Ok(EvaluateCommand {
            operation,
            operands,
        })
    }
}

/// Numeric JSON values keep their literal text, so a literal outside the
/// `f64` range parses to an infinity here instead of failing the body.
fn operand_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    pub result: f64,
}

/// One history entry as returned by `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryDto {
    #[schema(example = "add")]
    pub operation: String,
    pub a: f64,
    /// Null for sqrt
    pub b: Option<f64>,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryDto {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            operation: entry.operation.as_str().to_owned(),
            a: entry.a,
            b: entry.b,
            result: entry.result,
            timestamp: entry.timestamp,
        }
    }
}

/// Confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "History cleared")]
    pub message: String,
}
