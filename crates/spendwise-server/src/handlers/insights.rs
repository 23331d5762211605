//! Insight handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use spendwise_core::insights::{Insight, InsightEngine};

/// GET /api/insights - Generate insights from current transactions and budgets
pub async fn list_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let snapshot = state.db.snapshot()?;
    let engine = InsightEngine::new(state.insights.clone());

    let insights = engine.generate(&snapshot)?;
    tracing::debug!(count = insights.len(), "Insights generated");

    Ok(Json(insights))
}
