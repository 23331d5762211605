//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

use axum::extract::Request;
use serde::de::DeserializeOwned;

use crate::{AppError, MAX_BODY_SIZE};

pub mod budgets;
pub mod categories;
pub mod insights;
pub mod reports;
pub mod transactions;

// Re-export all handlers for use in router
pub use budgets::*;
pub use categories::*;
pub use insights::*;
pub use reports::*;
pub use transactions::*;

/// Read and parse a JSON request body
async fn read_json<T: DeserializeOwned>(request: Request) -> Result<T, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::bad_request(&format!("Invalid JSON: {}", e))
    })
}
