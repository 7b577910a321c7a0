//! Calculations API endpoints

use api_types::calculation::{CalculationNew, CalculationUpdate, CalculationView};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ServerError, server::ServerState, user};

fn view(calculation: engine::Calculation) -> CalculationView {
    CalculationView {
        id: calculation.id,
        user_id: calculation.user_id,
        operation: calculation.operation.as_str().to_string(),
        operand1: calculation.operand1,
        operand2: calculation.operand2,
        result: calculation.result,
        created_at: calculation.created_at,
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Browse the calculations owned by the authenticated user.
pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CalculationView>>, ServerError> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(100);

    let calculations = state
        .engine
        .list_calculations(&user.username, skip, limit)
        .await?;

    Ok(Json(calculations.into_iter().map(view).collect()))
}

/// Read a single calculation by id.
pub async fn get(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CalculationView>, ServerError> {
    let calculation = state.engine.calculation(id, &user.username).await?;

    Ok(Json(view(calculation)))
}

/// Add a calculation; the result is computed server-side.
pub async fn create(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<CalculationNew>,
) -> Result<(StatusCode, Json<CalculationView>), ServerError> {
    let calculation = state
        .engine
        .create_calculation(engine::CreateCalculationCmd {
            operation: payload.operation,
            operand1: payload.operand1,
            operand2: payload.operand2,
            user_id: user.username.clone(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(calculation))))
}

/// Edit a calculation; omitted fields keep their stored values and the
/// result is recomputed from the merged state.
pub async fn update(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CalculationUpdate>,
) -> Result<Json<CalculationView>, ServerError> {
    let calculation = state
        .engine
        .update_calculation(engine::UpdateCalculationCmd {
            calculation_id: id,
            user_id: user.username.clone(),
            operation: payload.operation,
            operand1: payload.operand1,
            operand2: payload.operand2,
        })
        .await?;

    Ok(Json(view(calculation)))
}

/// Delete a calculation permanently.
pub async fn delete(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_calculation(id, &user.username).await?;

    Ok(StatusCode::NO_CONTENT)
}
