//! Category and health handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use spendwise_core::models::Category;

/// Category with display metadata
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    /// Whether a budget already exists for this category
    pub budgeted: bool,
}

/// GET /api/health - Liveness check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/categories - All categories with labels, colours and budget status
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryInfo>>, AppError> {
    let budgets = state.db.list_budgets()?;

    let categories = Category::all()
        .iter()
        .map(|&category| CategoryInfo {
            category,
            label: category.label(),
            color: category.color(),
            budgeted: budgets.iter().any(|b| b.category == category),
        })
        .collect();

    Ok(Json(categories))
}
