use crate::models::Operation;

/// Error kinds produced by the calculator.
///
/// Every variant is a deterministic input error detected before the history
/// is touched. Callers branch on the variant (or on [`CalculatorError::code`]);
/// the `Display` text is the user-facing message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Operand count does not match the operation's arity
    #[error("operation '{operation}' requires {expected} operand(s), got {actual}")]
    InvalidArity {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    /// Operand is missing, non-numeric, NaN or infinite
    #[error("invalid number: operand {index} must be a finite number")]
    InvalidOperand { index: usize },

    /// Divisor is exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative number
    #[error("cannot calculate square root of negative number")]
    NegativeRadicand,

    /// Operation tag is not recognized
    #[error("unknown operation: '{0}'")]
    UnknownOperation(String),
}

impl CalculatorError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArity { .. } => "INVALID_ARITY",
            Self::InvalidOperand { .. } => "INVALID_OPERAND",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::NegativeRadicand => "NEGATIVE_RADICAND",
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
        }
    }
}
