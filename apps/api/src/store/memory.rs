//! In-memory `CareerStore` for tests. Transactions stage their writes and apply
//! them on commit; a second first-insert of one industry fails at commit the way
//! a unique index would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::insights::models::NewIndustryInsight;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::User;
use crate::profile::models::ProfileEdits;
use crate::store::{CareerStore, ProfileTransaction};

#[derive(Default)]
struct State {
    users: HashMap<String, User>,
    insights: HashMap<String, IndustryInsightRow>,
    fail_insight_writes: bool,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile and returns it.
    pub fn seed_user(&self, external_id: &str, industry: Option<&str>) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            external_id: external_id.to_string(),
            email: format!("{external_id}@example.com"),
            name: Some("Test User".to_string()),
            industry: industry.map(String::from),
            experience: None,
            bio: None,
            skills: vec![],
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .unwrap()
            .users
            .insert(external_id.to_string(), user.clone());
        user
    }

    pub fn seed_insight(&self, insight: &NewIndustryInsight) -> IndustryInsightRow {
        let row = to_row(insight);
        self.state
            .lock()
            .unwrap()
            .insights
            .insert(row.industry.clone(), row.clone());
        row
    }

    pub fn user(&self, external_id: &str) -> Option<User> {
        self.state.lock().unwrap().users.get(external_id).cloned()
    }

    pub fn insight_count(&self) -> usize {
        self.state.lock().unwrap().insights.len()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    /// Makes every subsequent insight insert fail.
    pub fn fail_insight_writes(&self) {
        self.state.lock().unwrap().fail_insight_writes = true;
    }
}

fn to_row(insight: &NewIndustryInsight) -> IndustryInsightRow {
    IndustryInsightRow {
        id: Uuid::new_v4(),
        industry: insight.industry.clone(),
        salary_ranges: serde_json::to_value(&insight.salary_ranges).unwrap(),
        growth_rate: insight.growth_rate,
        demand_level: insight.demand_level.as_str().to_string(),
        top_skills: insight.top_skills.clone(),
        market_outlook: insight.market_outlook.as_str().to_string(),
        key_trends: insight.key_trends.clone(),
        recommended_skills: insight.recommended_skills.clone(),
        last_updated: insight.last_updated,
        next_update: insight.next_update,
    }
}

#[async_trait]
impl CareerStore for MemoryStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<User>> {
        Ok(self.user(external_id))
    }

    async fn create_placeholder_user(
        &self,
        external_id: &str,
        name: &str,
        email: &str,
    ) -> Result<User> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let user = state
            .users
            .entry(external_id.to_string())
            .or_insert_with(|| User {
                id: Uuid::new_v4(),
                external_id: external_id.to_string(),
                email: email.to_string(),
                name: Some(name.to_string()),
                industry: None,
                experience: None,
                bio: None,
                skills: vec![],
                created_at: now,
                updated_at: now,
            });
        Ok(user.clone())
    }

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsightRow>> {
        Ok(self.state.lock().unwrap().insights.get(industry).cloned())
    }

    async fn insert_insight(&self, insight: &NewIndustryInsight) -> Result<IndustryInsightRow> {
        let mut state = self.state.lock().unwrap();
        if state.fail_insight_writes {
            bail!("connection refused");
        }
        let row = state
            .insights
            .entry(insight.industry.clone())
            .or_insert_with(|| to_row(insight));
        Ok(row.clone())
    }

    async fn begin(&self) -> Result<Box<dyn ProfileTransaction>> {
        Ok(Box::new(MemoryTransaction {
            state: Arc::clone(&self.state),
            staged_insight: None,
            staged_user: None,
        }))
    }
}

struct MemoryTransaction {
    state: Arc<Mutex<State>>,
    staged_insight: Option<IndustryInsightRow>,
    staged_user: Option<User>,
}

#[async_trait]
impl ProfileTransaction for MemoryTransaction {
    async fn find_insight(&mut self, industry: &str) -> Result<Option<IndustryInsightRow>> {
        if let Some(staged) = self.staged_insight.as_ref().filter(|i| i.industry == industry) {
            return Ok(Some(staged.clone()));
        }
        Ok(self.state.lock().unwrap().insights.get(industry).cloned())
    }

    async fn insert_insight(
        &mut self,
        insight: &NewIndustryInsight,
    ) -> Result<IndustryInsightRow> {
        let state = self.state.lock().unwrap();
        if state.fail_insight_writes {
            bail!("connection refused");
        }
        if let Some(existing) = state.insights.get(&insight.industry) {
            return Ok(existing.clone());
        }
        let row = to_row(insight);
        self.staged_insight = Some(row.clone());
        Ok(row)
    }

    async fn update_profile(&mut self, user_id: Uuid, edits: &ProfileEdits) -> Result<User> {
        let state = self.state.lock().unwrap();
        let mut user = state
            .users
            .values()
            .find(|u| u.id == user_id)
            .cloned()
            .with_context(|| format!("user {user_id} no longer exists"))?;
        user.industry = Some(edits.industry.clone());
        user.experience = edits.experience;
        user.bio = edits.bio.clone();
        user.skills = edits.skills.clone();
        user.updated_at = Utc::now();
        self.staged_user = Some(user.clone());
        Ok(user)
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let MemoryTransaction {
            state: shared,
            staged_insight,
            staged_user,
        } = *self;
        let mut state = shared.lock().unwrap();
        if let Some(insight) = staged_insight {
            if state.insights.contains_key(&insight.industry) {
                bail!(
                    "duplicate key value violates unique constraint \"industry_insights_industry_key\""
                );
            }
            state.insights.insert(insight.industry.clone(), insight);
        }
        if let Some(user) = staged_user {
            state.users.insert(user.external_id.clone(), user);
        }
        Ok(())
    }
}
