//! Insight Provider — returns the caller's industry insight, generating and
//! storing it on first request.
//!
//! Flow: load profile → look up insight by industry → (miss) generate →
//!       normalize + validate → create-or-reuse insert.

use chrono::Utc;
use tracing::{debug, info};

use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::insights::generator::InsightGenerator;
use crate::insights::models::NewIndustryInsight;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::User;
use crate::store::CareerStore;

/// Loads the caller's profile or fails with `NotFound`.
pub async fn load_profile(
    store: &dyn CareerStore,
    caller: &AuthenticatedUser,
) -> Result<User, AppError> {
    store
        .find_user(&caller.external_id)
        .await
        .map_err(|e| AppError::storage(e, "Failed to load profile"))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Returns the insight for the caller's industry, creating it if needed.
///
/// A cache hit has no side effects. On a miss the generated report is validated
/// before anything is written, so a rejected report leaves no row behind.
pub async fn get_insight(
    store: &dyn CareerStore,
    generator: &dyn InsightGenerator,
    caller: &AuthenticatedUser,
) -> Result<IndustryInsightRow, AppError> {
    let user = load_profile(store, caller).await?;

    let industry = user.industry_label().ok_or_else(|| {
        AppError::Validation("Select an industry before requesting insights".to_string())
    })?;

    let existing = store
        .find_insight(industry)
        .await
        .map_err(|e| AppError::storage(e, "Failed to load industry insight"))?;

    if let Some(insight) = existing {
        if insight.is_stale(Utc::now()) {
            debug!(
                "Serving insight for '{industry}' past its refresh date {}",
                insight.next_update
            );
        }
        debug!("Returning existing industry insight for '{industry}'");
        return Ok(insight);
    }

    info!("No existing insight for '{industry}'. Generating new insights...");
    let generated = generator.generate(industry).await?;
    let new_insight = NewIndustryInsight::from_generated(industry, generated, Utc::now())?;
    debug!(
        "Normalized enums: demand_level={}, market_outlook={}",
        new_insight.demand_level, new_insight.market_outlook
    );

    let saved = store
        .insert_insight(&new_insight)
        .await
        .map_err(|e| AppError::storage(e, "Database write failed"))?;

    info!("Industry insight saved for '{industry}' ({})", saved.id);
    Ok(saved)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::errors::AppError;
    use crate::insights::generator::InsightGenerator;
    use crate::insights::models::{sample_generated, GeneratedInsight};

    /// Returns a fixed report and counts calls.
    pub struct ScriptedGenerator {
        demand: String,
        outlook: String,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub fn new(demand: &str, outlook: &str) -> Self {
            Self {
                demand: demand.to_string(),
                outlook: outlook.to_string(),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InsightGenerator for ScriptedGenerator {
        async fn generate(&self, _industry: &str) -> Result<GeneratedInsight, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(sample_generated(&self.demand, &self.outlook))
        }
    }

    /// Always fails the way an unparseable model reply does.
    pub struct GarbageGenerator;

    #[async_trait]
    impl InsightGenerator for GarbageGenerator {
        async fn generate(&self, _industry: &str) -> Result<GeneratedInsight, AppError> {
            Err(AppError::Format {
                reason: "expected value at line 1 column 1".to_string(),
                raw: "Here are some insights!".to_string(),
            })
        }
    }
}
