//! Validation and IEEE-754 evaluation of a single operation.
//!
//! Checks run in a fixed order: arity, operand finiteness, then the
//! operation-specific precondition. Nothing here touches the history.

use calculator_sdk::{CalculatorError, Operation};

/// Validate `operands` for `operation` and compute the result.
///
/// # Errors
/// - `InvalidArity` when the operand count does not match the operation
/// - `InvalidOperand` when an operand is NaN or infinite
/// - `DivisionByZero` when dividing by `0.0` or `-0.0`
/// - `NegativeRadicand` when taking the square root of a negative number
pub fn evaluate(operation: Operation, operands: &[f64]) -> Result<f64, CalculatorError> {
    let expected = operation.arity();
    if operands.len() != expected {
        return Err(CalculatorError::InvalidArity {
            operation,
            expected,
            actual: operands.len(),
        });
    }

    if let Some(index) = operands.iter().position(|x| !x.is_finite()) {
        return Err(CalculatorError::InvalidOperand { index });
    }

    let a = operands[0];
    let result = match operation {
        Operation::Add => a + operands[1],
        Operation::Subtract => a - operands[1],
        Operation::Multiply => a * operands[1],
        Operation::Divide => {
            let b = operands[1];
            if b == 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            a / b
        }
        // Negative base with a fractional exponent yields NaN, which is returned as-is.
        Operation::Power => a.powf(operands[1]),
        Operation::Sqrt => {
            if a < 0.0 {
                return Err(CalculatorError::NegativeRadicand);
            }
            a.sqrt()
        }
    };

    Ok(result)
}
