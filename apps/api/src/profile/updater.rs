//! Profile Updater — ensures an insight exists for the chosen industry and
//! saves the user's edits, all in one transaction.
//!
//! The transaction is bounded by `Config::profile_tx_timeout`. On timeout the
//! transaction future is dropped, which rolls it back.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::insights::generator::InsightGenerator;
use crate::insights::models::NewIndustryInsight;
use crate::insights::provider::load_profile;
use crate::profile::models::{ProfileEdits, ProfileUpdate};
use crate::store::CareerStore;
use crate::view_cache::{ViewCache, ROOT_VIEW_PATH};

/// Collaborators a profile update needs.
pub struct ProfileUpdater<'a> {
    pub store: &'a dyn CareerStore,
    pub generator: &'a dyn InsightGenerator,
    pub view_cache: &'a dyn ViewCache,
    pub tx_timeout: Duration,
}

impl ProfileUpdater<'_> {
    /// Applies `edits` to the caller's profile.
    ///
    /// Any failure inside the transaction, the timeout included, leaves both
    /// tables untouched and is returned as `AppError::ProfileUpdate`.
    pub async fn update_profile(
        &self,
        caller: &AuthenticatedUser,
        edits: ProfileEdits,
    ) -> Result<ProfileUpdate, AppError> {
        let user = load_profile(self.store, caller).await?;
        let edits = edits.validated()?;

        let outcome = tokio::time::timeout(self.tx_timeout, self.run_transaction(user.id, &edits))
            .await
            .unwrap_or_else(|_| {
                Err(AppError::Storage(anyhow::anyhow!(
                    "transaction timed out after {}ms",
                    self.tx_timeout.as_millis()
                )))
            });

        let update = outcome.map_err(|e| {
            debug!("Error updating user and industry: {e}");
            AppError::ProfileUpdate(Box::new(e))
        })?;

        info!(
            "Updated profile {} (industry '{}')",
            update.updated_user.id, edits.industry
        );

        // The write is committed; a missed invalidation only delays re-rendering.
        if let Err(e) = self.view_cache.invalidate(ROOT_VIEW_PATH).await {
            warn!("Failed to invalidate view cache for '{ROOT_VIEW_PATH}': {e:#}");
        }

        Ok(update)
    }

    async fn run_transaction(
        &self,
        user_id: Uuid,
        edits: &ProfileEdits,
    ) -> Result<ProfileUpdate, AppError> {
        let mut tx = self
            .store
            .begin()
            .await
            .map_err(|e| AppError::storage(e, "Failed to open transaction"))?;

        let existing = tx
            .find_insight(&edits.industry)
            .await
            .map_err(|e| AppError::storage(e, "Failed to load industry insight"))?;

        let industry_insight = match existing {
            Some(insight) => insight,
            None => {
                info!(
                    "No insight for '{}' yet; generating inside profile update",
                    edits.industry
                );
                let generated = self.generator.generate(&edits.industry).await?;
                let new_insight =
                    NewIndustryInsight::from_generated(&edits.industry, generated, Utc::now())?;
                tx.insert_insight(&new_insight)
                    .await
                    .map_err(|e| AppError::storage(e, "Failed to create industry insight"))?
            }
        };

        let updated_user = tx
            .update_profile(user_id, edits)
            .await
            .map_err(|e| AppError::storage(e, "Failed to update user"))?;

        tx.commit()
            .await
            .map_err(|e| AppError::storage(e, "Failed to commit profile update"))?;

        Ok(ProfileUpdate {
            updated_user,
            industry_insight,
        })
    }
}
