//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    Json,
};

use super::read_json;
use crate::{AppError, AppState, SuccessResponse};
use spendwise_core::models::{NewTransaction, Transaction};

/// GET /api/transactions - List transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.db.list_transactions()?;
    Ok(Json(transactions))
}

/// GET /api/transactions/:id - Get a single transaction
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = state
        .db
        .get_transaction(id)?
        .ok_or_else(|| AppError::not_found(&format!("Transaction {} not found", id)))?;

    Ok(Json(transaction))
}

/// POST /api/transactions - Record a new transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let req: NewTransaction = read_json(request).await?;

    let transaction = state.db.create_transaction(&req)?;
    tracing::info!(id = transaction.id, "Transaction created");

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// PUT /api/transactions/:id - Replace a transaction's fields
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<Transaction>, AppError> {
    let req: NewTransaction = read_json(request).await?;

    let transaction = state.db.update_transaction(id, &req)?;
    tracing::info!(id, "Transaction updated");

    Ok(Json(transaction))
}

/// DELETE /api/transactions/:id - Delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_transaction(id)?;
    tracing::info!(id, "Transaction deleted");

    Ok(Json(SuccessResponse { success: true }))
}
