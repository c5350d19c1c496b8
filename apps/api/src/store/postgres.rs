use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::insights::models::NewIndustryInsight;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::User;
use crate::profile::models::ProfileEdits;
use crate::store::{CareerStore, ProfileTransaction};

/// `ON CONFLICT DO NOTHING` makes a losing concurrent insert return no row
/// instead of failing; the caller then re-reads the winner's row.
const INSERT_INSIGHT_SQL: &str = r#"
    INSERT INTO industry_insights
        (id, industry, salary_ranges, growth_rate, demand_level, top_skills,
         market_outlook, key_trends, recommended_skills, last_updated, next_update)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
    ON CONFLICT (industry) DO NOTHING
    RETURNING *
"#;

const SELECT_INSIGHT_SQL: &str = "SELECT * FROM industry_insights WHERE industry = $1";

pub struct PgCareerStore {
    pool: PgPool,
}

impl PgCareerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerStore for PgCareerStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_placeholder_user(
        &self,
        external_id: &str,
        name: &str,
        email: &str,
    ) -> Result<User> {
        let mut conn = self.pool.acquire().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (id, external_id, name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (external_id) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(external_id)
        .bind(name)
        .bind(email)
        .execute(&mut *conn)
        .await?
        .rows_affected();

        if inserted > 0 {
            info!("Provisioned placeholder profile for {external_id}");
        }

        sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(&mut *conn)
            .await?
            .with_context(|| format!("profile for {external_id} missing after insert"))
    }

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsightRow>> {
        Ok(sqlx::query_as::<_, IndustryInsightRow>(SELECT_INSIGHT_SQL)
            .bind(industry)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_insight(&self, insight: &NewIndustryInsight) -> Result<IndustryInsightRow> {
        let mut conn = self.pool.acquire().await?;
        insert_or_reuse_insight(&mut conn, insight).await
    }

    async fn begin(&self) -> Result<Box<dyn ProfileTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgProfileTransaction { tx }))
    }
}

pub struct PgProfileTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ProfileTransaction for PgProfileTransaction {
    async fn find_insight(&mut self, industry: &str) -> Result<Option<IndustryInsightRow>> {
        Ok(sqlx::query_as::<_, IndustryInsightRow>(SELECT_INSIGHT_SQL)
            .bind(industry)
            .fetch_optional(&mut *self.tx)
            .await?)
    }

    async fn insert_insight(
        &mut self,
        insight: &NewIndustryInsight,
    ) -> Result<IndustryInsightRow> {
        insert_or_reuse_insight(&mut self.tx, insight).await
    }

    async fn update_profile(&mut self, user_id: Uuid, edits: &ProfileEdits) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET industry = $2, experience = $3, bio = $4, skills = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&edits.industry)
        .bind(edits.experience)
        .bind(&edits.bio)
        .bind(&edits.skills)
        .fetch_optional(&mut *self.tx)
        .await?
        .with_context(|| format!("user {user_id} no longer exists"))
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

async fn insert_or_reuse_insight(
    conn: &mut PgConnection,
    insight: &NewIndustryInsight,
) -> Result<IndustryInsightRow> {
    let salary_ranges = serde_json::to_value(&insight.salary_ranges)
        .context("Failed to serialize salary ranges")?;

    let inserted = sqlx::query_as::<_, IndustryInsightRow>(INSERT_INSIGHT_SQL)
        .bind(Uuid::new_v4())
        .bind(&insight.industry)
        .bind(salary_ranges)
        .bind(insight.growth_rate)
        .bind(insight.demand_level.as_str())
        .bind(&insight.top_skills)
        .bind(insight.market_outlook.as_str())
        .bind(&insight.key_trends)
        .bind(&insight.recommended_skills)
        .bind(insight.last_updated)
        .bind(insight.next_update)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(row) = inserted {
        info!("Inserted industry insight {} for '{}'", row.id, row.industry);
        return Ok(row);
    }

    info!(
        "Industry insight for '{}' was created concurrently; reusing it",
        insight.industry
    );
    sqlx::query_as::<_, IndustryInsightRow>(SELECT_INSIGHT_SQL)
        .bind(&insight.industry)
        .fetch_optional(&mut *conn)
        .await?
        .with_context(|| format!("insight for '{}' missing after conflict", insight.industry))
}
