//! Persistence ports for users and industry insights.
//!
//! Domain code talks to `CareerStore`; the Postgres implementation lives in
//! `postgres.rs`. Errors are `anyhow` so callers can attach the operation that
//! failed before turning them into `AppError::Storage`.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::insights::models::NewIndustryInsight;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::User;
use crate::profile::models::ProfileEdits;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait CareerStore: Send + Sync {
    /// Loads a profile by identity-provider id.
    async fn find_user(&self, external_id: &str) -> Result<Option<User>>;

    /// Inserts a profile for `external_id` unless one exists, returning the stored row.
    async fn create_placeholder_user(
        &self,
        external_id: &str,
        name: &str,
        email: &str,
    ) -> Result<User>;

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsightRow>>;

    /// Create-or-reuse on the unique industry key.
    async fn insert_insight(&self, insight: &NewIndustryInsight) -> Result<IndustryInsightRow>;

    /// Opens a transaction. Dropping it without `commit` rolls everything back.
    async fn begin(&self) -> Result<Box<dyn ProfileTransaction>>;
}

/// The writes a profile update performs atomically.
#[async_trait]
pub trait ProfileTransaction: Send {
    async fn find_insight(&mut self, industry: &str) -> Result<Option<IndustryInsightRow>>;

    async fn insert_insight(&mut self, insight: &NewIndustryInsight)
        -> Result<IndustryInsightRow>;

    async fn update_profile(&mut self, user_id: Uuid, edits: &ProfileEdits) -> Result<User>;

    async fn commit(self: Box<Self>) -> Result<()>;
}
