//! Calculation BREAD operations, scoped to the owning user.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    prelude::*,
};
use uuid::Uuid;

use crate::{
    Calculation, CreateCalculationCmd, EngineError, Operation, ResultEngine, UpdateCalculationCmd,
    calculations, eval::evaluate,
};

use super::{Engine, with_tx};

impl Engine {
    /// Ownership-guarded lookup: filters by id AND owner, so a record owned
    /// by someone else is indistinguishable from a missing one.
    async fn find_owned<C: ConnectionTrait>(
        &self,
        db: &C,
        calculation_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<calculations::Model> {
        calculations::Entity::find_by_id(calculation_id.to_string())
            .filter(calculations::Column::UserId.eq(user_id.to_string()))
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("calculation".to_string()))
    }

    /// Lists calculations owned by a user, oldest first.
    ///
    /// Ordered by `(created_at, id)` so pagination is stable. An empty page
    /// is not an error.
    pub async fn list_calculations(
        &self,
        user_id: &str,
        skip: u64,
        limit: u64,
    ) -> ResultEngine<Vec<Calculation>> {
        let models = calculations::Entity::find()
            .filter(calculations::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(calculations::Column::CreatedAt)
            .order_by_asc(calculations::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.database)
            .await?;

        models.into_iter().map(Calculation::try_from).collect()
    }

    /// Returns a single calculation owned by the user.
    pub async fn calculation(
        &self,
        calculation_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<Calculation> {
        let model = self
            .find_owned(&self.database, calculation_id, user_id)
            .await?;
        Calculation::try_from(model)
    }

    /// Creates a calculation for the user.
    ///
    /// The operation tag is parsed and the result evaluated before anything
    /// is persisted, so a validation failure leaves no record behind.
    pub async fn create_calculation(
        &self,
        cmd: CreateCalculationCmd,
    ) -> ResultEngine<Calculation> {
        let operation = Operation::try_from(cmd.operation.as_str())?;
        let result = evaluate(operation, cmd.operand1, cmd.operand2)?;

        let calculation = Calculation {
            id: Uuid::new_v4(),
            user_id: cmd.user_id,
            operation,
            operand1: cmd.operand1,
            operand2: cmd.operand2,
            result,
            created_at: Utc::now(),
        };
        calculations::ActiveModel::from(&calculation)
            .insert(&self.database)
            .await?;

        Ok(calculation)
    }

    /// Applies a partial update and recomputes `result` from the merged
    /// state.
    ///
    /// Lookup, merge, recompute and write all happen inside one DB
    /// transaction: a failing recompute (divide-by-zero, unknown tag) leaves
    /// the stored record exactly as it was, and no reader can observe a
    /// half-applied update.
    pub async fn update_calculation(
        &self,
        cmd: UpdateCalculationCmd,
    ) -> ResultEngine<Calculation> {
        with_tx!(self, |db_tx| {
            let model = self
                .find_owned(&db_tx, cmd.calculation_id, &cmd.user_id)
                .await?;
            let mut calculation = Calculation::try_from(model)?;

            if let Some(operation) = &cmd.operation {
                calculation.operation = Operation::try_from(operation.as_str())?;
            }
            if let Some(operand1) = cmd.operand1 {
                calculation.operand1 = operand1;
            }
            if let Some(operand2) = cmd.operand2 {
                calculation.operand2 = operand2;
            }

            calculation.result = evaluate(
                calculation.operation,
                calculation.operand1,
                calculation.operand2,
            )?;

            let active = calculations::ActiveModel {
                id: ActiveValue::Set(calculation.id.to_string()),
                operation: ActiveValue::Set(calculation.operation.as_str().to_string()),
                operand1: ActiveValue::Set(calculation.operand1),
                operand2: ActiveValue::Set(calculation.operand2),
                result: ActiveValue::Set(calculation.result),
                ..Default::default()
            };
            active.update(&db_tx).await?;

            Ok(calculation)
        })
    }

    /// Deletes a calculation owned by the user.
    ///
    /// Deleting an id that is already gone reports not-found, same as a
    /// read.
    pub async fn delete_calculation(
        &self,
        calculation_id: Uuid,
        user_id: &str,
    ) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = self.find_owned(&db_tx, calculation_id, user_id).await?;
            calculations::Entity::delete_by_id(model.id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }
}
