//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::profile::models::{OnboardingStatus, ProfileEdits, ProfileUpdateResponse};
use crate::profile::onboarding::get_onboarding_status;
use crate::profile::updater::ProfileUpdater;
use crate::state::AppState;

/// PUT /api/v1/profile
///
/// Saves profile edits, creating the industry insight in the same transaction if needed.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Json(edits): Json<ProfileEdits>,
) -> Result<Json<ProfileUpdateResponse>, AppError> {
    let updater = ProfileUpdater {
        store: state.store.as_ref(),
        generator: state.generator.as_ref(),
        view_cache: state.view_cache.as_ref(),
        tx_timeout: state.config.profile_tx_timeout,
    };

    let update = updater.update_profile(&caller, edits).await?;

    Ok(Json(ProfileUpdateResponse {
        success: true,
        update,
    }))
}

/// GET /api/v1/onboarding/status
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<Json<OnboardingStatus>, AppError> {
    let status = get_onboarding_status(state.store.as_ref(), &caller).await?;
    Ok(Json(status))
}
