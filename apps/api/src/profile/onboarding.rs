use tracing::info;

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::profile::models::OnboardingStatus;
use crate::store::CareerStore;

pub const PLACEHOLDER_NAME: &str = "New User";

/// Email stored for a just-in-time profile until the real one is synced.
pub fn placeholder_email(external_id: &str) -> String {
    format!("{external_id}@placeholder.com")
}

/// Reports whether the caller has chosen an industry.
/// First contact provisions a placeholder profile.
pub async fn get_onboarding_status(
    store: &dyn CareerStore,
    caller: &AuthenticatedUser,
) -> Result<OnboardingStatus, AppError> {
    let existing = store
        .find_user(&caller.external_id)
        .await
        .map_err(|e| AppError::storage(e, "Failed to load profile"))?;

    let user = match existing {
        Some(user) => user,
        None => {
            info!("No profile for {}; provisioning placeholder", caller.external_id);
            store
                .create_placeholder_user(
                    &caller.external_id,
                    PLACEHOLDER_NAME,
                    &placeholder_email(&caller.external_id),
                )
                .await
                .map_err(|e| AppError::storage(e, "Failed to provision profile"))?
        }
    };

    Ok(OnboardingStatus {
        is_onboarded: user.is_onboarded(),
    })
}
