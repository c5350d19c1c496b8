use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `industry_insights` table. One row per industry label.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndustryInsightRow {
    pub id: Uuid,
    pub industry: String,
    /// JSON array of `SalaryRange`.
    pub salary_ranges: Value,
    pub growth_rate: f64,
    /// One of HIGH, MEDIUM, LOW.
    pub demand_level: String,
    pub top_skills: Vec<String>,
    /// One of POSITIVE, NEUTRAL, NEGATIVE.
    pub market_outlook: String,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}

impl IndustryInsightRow {
    /// Whether the scheduled refresh time has passed. Informational only.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_update
    }
}
