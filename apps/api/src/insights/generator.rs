//! Insight generation — the one place an industry report is requested from the model.
//!
//! `AppState` carries an `Arc<dyn InsightGenerator>` so the model backend can be
//! replaced (tests use scripted generators).

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::insights::models::GeneratedInsight;
use crate::insights::prompts::build_insight_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Produces an un-normalized report for `industry`. Single shot.
    async fn generate(&self, industry: &str) -> Result<GeneratedInsight, AppError>;
}

/// Generator backed by the shared `LlmClient`.
pub struct LlmInsightGenerator {
    llm: LlmClient,
}

impl LlmInsightGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InsightGenerator for LlmInsightGenerator {
    async fn generate(&self, industry: &str) -> Result<GeneratedInsight, AppError> {
        info!("Requesting industry insight from model for '{industry}'");
        let prompt = build_insight_prompt(industry);
        self.llm
            .call_json::<GeneratedInsight>(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(into_app_error)
    }
}

fn into_app_error(err: LlmError) -> AppError {
    match err {
        LlmError::Parse { source, raw } => {
            debug!("Failed to parse model JSON: {raw}");
            AppError::Format {
                reason: source.to_string(),
                raw,
            }
        }
        other => AppError::Llm(format!("Insight generation failed: {other}")),
    }
}
