use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::User;

/// Profile fields a user edits during onboarding or from settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileEdits {
    pub industry: String,
    /// Years of experience.
    pub experience: Option<i32>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ProfileEdits {
    /// Trims free text and rejects edits that cannot be stored.
    pub fn validated(self) -> Result<Self, AppError> {
        let industry = self.industry.trim().to_string();
        if industry.is_empty() {
            return Err(AppError::Validation("industry cannot be empty".to_string()));
        }
        if matches!(self.experience, Some(years) if years < 0) {
            return Err(AppError::Validation(
                "experience cannot be negative".to_string(),
            ));
        }

        let bio = self
            .bio
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        let skills = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            industry,
            experience: self.experience,
            bio,
            skills,
        })
    }
}

/// Both records written by a profile update.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub updated_user: User,
    pub industry_insight: IndustryInsightRow,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub update: ProfileUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
}
