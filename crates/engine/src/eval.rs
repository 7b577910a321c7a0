//! The arithmetic evaluator.
//!
//! [`evaluate`] is the single validating function: every create and every
//! update recompute routes through it, so divide-by-zero can never reach the
//! database through any code path.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl TryFrom<&str> for Operation {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(EngineError::InvalidOperation(other.to_string())),
        }
    }
}

/// Computes the result of a two-operand operation.
///
/// Plain IEEE double arithmetic; no rounding or normalization. Division
/// rejects a zero divisor with an exact comparison, not a tolerance check.
pub fn evaluate(operation: Operation, operand1: f64, operand2: f64) -> ResultEngine<f64> {
    match operation {
        Operation::Add => Ok(operand1 + operand2),
        Operation::Subtract => Ok(operand1 - operand2),
        Operation::Multiply => Ok(operand1 * operand2),
        Operation::Divide => {
            if operand2 == 0.0 {
                return Err(EngineError::DivisionByZero);
            }
            Ok(operand1 / operand2)
        }
    }
}
