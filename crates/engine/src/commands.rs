//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

use uuid::Uuid;

/// Create a calculation.
///
/// `operation` is the raw tag; the engine parses it so an unknown value
/// surfaces as a validation error carrying the offending tag.
#[derive(Clone, Debug)]
pub struct CreateCalculationCmd {
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
    pub user_id: String,
}

impl CreateCalculationCmd {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        operation: impl Into<String>,
        operand1: f64,
        operand2: f64,
    ) -> Self {
        Self {
            operation: operation.into(),
            operand1,
            operand2,
            user_id: user_id.into(),
        }
    }
}

/// Update an existing calculation.
///
/// Unset fields keep their prior values; `result` is recomputed from the
/// merged state regardless of which fields changed.
#[derive(Clone, Debug)]
pub struct UpdateCalculationCmd {
    pub calculation_id: Uuid,
    pub user_id: String,

    pub operation: Option<String>,
    pub operand1: Option<f64>,
    pub operand2: Option<f64>,
}

impl UpdateCalculationCmd {
    #[must_use]
    pub fn new(calculation_id: Uuid, user_id: impl Into<String>) -> Self {
        Self {
            calculation_id,
            user_id: user_id.into(),
            operation: None,
            operand1: None,
            operand2: None,
        }
    }

    #[must_use]
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    #[must_use]
    pub fn operand1(mut self, operand1: f64) -> Self {
        self.operand1 = Some(operand1);
        self
    }

    #[must_use]
    pub fn operand2(mut self, operand2: f64) -> Self {
        self.operand2 = Some(operand2);
        self
    }
}
