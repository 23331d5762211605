//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    Json,
};

use super::read_json;
use crate::{AppError, AppState, SuccessResponse};
use spendwise_core::models::{Budget, BudgetUpdate, NewBudget};

/// GET /api/budgets - List budgets in creation order
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Budget>>, AppError> {
    let budgets = state.db.list_budgets()?;
    Ok(Json(budgets))
}

/// POST /api/budgets - Create a budget (one per category)
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Budget>), AppError> {
    let req: NewBudget = read_json(request).await?;

    let budget = state.db.create_budget(&req)?;
    tracing::info!(id = budget.id, category = %budget.category, "Budget created");

    Ok((StatusCode::CREATED, Json(budget)))
}

/// PUT /api/budgets/:id - Change a budget's amount
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<Budget>, AppError> {
    let req: BudgetUpdate = read_json(request).await?;

    let budget = state.db.update_budget(id, &req)?;
    tracing::info!(id, amount = budget.amount, "Budget updated");

    Ok(Json(budget))
}

/// DELETE /api/budgets/:id - Delete a budget
pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_budget(id)?;
    tracing::info!(id, "Budget deleted");

    Ok(Json(SuccessResponse { success: true }))
}
