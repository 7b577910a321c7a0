//! Calculation records.
//!
//! A `Calculation` stores an operation tag, its two operands and the derived
//! `result`. `result` is never written on its own: every path that touches
//! `operation`/`operand1`/`operand2` recomputes it through the evaluator.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Operation};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: Uuid,
    pub user_id: String,
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Calculation> for ActiveModel {
    fn from(calculation: &Calculation) -> Self {
        Self {
            id: ActiveValue::Set(calculation.id.to_string()),
            user_id: ActiveValue::Set(calculation.user_id.clone()),
            operation: ActiveValue::Set(calculation.operation.as_str().to_string()),
            operand1: ActiveValue::Set(calculation.operand1),
            operand2: ActiveValue::Set(calculation.operand2),
            result: ActiveValue::Set(calculation.result),
            created_at: ActiveValue::Set(calculation.created_at),
        }
    }
}

impl TryFrom<Model> for Calculation {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::InvalidId("invalid calculation id".to_string()))?,
            user_id: model.user_id,
            operation: Operation::try_from(model.operation.as_str())?,
            operand1: model.operand1,
            operand2: model.operand2,
            result: model.result,
            created_at: model.created_at,
        })
    }
}
