//! Axum route handlers for the Insights API.

use axum::{extract::State, Json};

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::insights::provider::get_insight;
use crate::models::insight::IndustryInsightRow;
use crate::state::AppState;

/// GET /api/v1/insights
///
/// Returns the insight for the caller's industry, generating it on first request.
pub async fn handle_get_insight(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<Json<IndustryInsightRow>, AppError> {
    let insight = get_insight(state.store.as_ref(), state.generator.as_ref(), &caller).await?;
    Ok(Json(insight))
}
