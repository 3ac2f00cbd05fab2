use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

/// Closed set of supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
}

impl Operation {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Sqrt,
    ];

    /// Number of operands the operation takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Sqrt => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => 2,
        }
    }

    /// Wire tag of the operation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalculatorError::UnknownOperation(s.to_owned()))
    }
}

/// One successful calculation.
///
/// `b` is `None` exactly when `operation` is [`Operation::Sqrt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub a: f64,
    pub b: Option<f64>,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_tag() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "bogus".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalculatorError::UnknownOperation("bogus".to_owned()));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("ADD".parse::<Operation>().is_err());
    }

    #[test]
    fn sqrt_is_the_only_unary_operation() {
        for op in Operation::ALL {
            let expected = if op == Operation::Sqrt { 1 } else { 2 };
            assert_eq!(op.arity(), expected, "{op}");
        }
    }

    #[test]
    fn history_entry_serializes_null_second_operand() {
        let entry = HistoryEntry {
            operation: Operation::Sqrt,
            a: 9.0,
            b: None,
            result: 3.0,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["operation"], "sqrt");
        assert!(json["b"].is_null());
        assert!(json["timestamp"].is_string());
    }
}
