use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::normalize::format_enum;

/// How long a generated insight is considered current.
pub const INSIGHT_REFRESH_INTERVAL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::High => "HIGH",
            DemandLevel::Medium => "MEDIUM",
            DemandLevel::Low => "LOW",
        }
    }
}

impl FromStr for DemandLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(DemandLevel::High),
            "MEDIUM" => Ok(DemandLevel::Medium),
            "LOW" => Ok(DemandLevel::Low),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketOutlook {
    Positive,
    Neutral,
    Negative,
}

impl MarketOutlook {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOutlook::Positive => "POSITIVE",
            MarketOutlook::Neutral => "NEUTRAL",
            MarketOutlook::Negative => "NEGATIVE",
        }
    }
}

impl FromStr for MarketOutlook {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(MarketOutlook::Positive),
            "NEUTRAL" => Ok(MarketOutlook::Neutral),
            "NEGATIVE" => Ok(MarketOutlook::Negative),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MarketOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub location: String,
}

/// The report exactly as the model returns it. Enum-like fields are free text
/// ("High", " positive ") until normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInsight {
    pub salary_ranges: Vec<SalaryRange>,
    pub growth_rate: f64,
    pub demand_level: String,
    pub top_skills: Vec<String>,
    pub market_outlook: String,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
}

/// A validated insight ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIndustryInsight {
    pub industry: String,
    pub salary_ranges: Vec<SalaryRange>,
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<String>,
    pub market_outlook: MarketOutlook,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}

impl NewIndustryInsight {
    /// Normalizes and validates a generated report. Every insert path goes through here.
    pub fn from_generated(
        industry: &str,
        generated: GeneratedInsight,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let demand_raw = format_enum(&generated.demand_level);
        let outlook_raw = format_enum(&generated.market_outlook);

        let demand_level = demand_raw
            .parse::<DemandLevel>()
            .map_err(|_| AppError::Validation(format!("Invalid demandLevel: {demand_raw}")))?;
        let market_outlook = outlook_raw
            .parse::<MarketOutlook>()
            .map_err(|_| AppError::Validation(format!("Invalid marketOutlook: {outlook_raw}")))?;

        Ok(Self {
            industry: industry.to_string(),
            salary_ranges: generated.salary_ranges,
            growth_rate: generated.growth_rate,
            demand_level,
            top_skills: generated.top_skills,
            market_outlook,
            key_trends: generated.key_trends,
            recommended_skills: generated.recommended_skills,
            last_updated: now,
            next_update: now + Duration::days(INSIGHT_REFRESH_INTERVAL_DAYS),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_generated(demand: &str, outlook: &str) -> GeneratedInsight {
    GeneratedInsight {
        salary_ranges: vec![SalaryRange {
            role: "Software Engineer".to_string(),
            min: 90_000.0,
            max: 180_000.0,
            median: 130_000.0,
            location: "US".to_string(),
        }],
        growth_rate: 6.5,
        demand_level: demand.to_string(),
        top_skills: vec!["Rust".to_string(), "Cloud".to_string()],
        market_outlook: outlook.to_string(),
        key_trends: vec!["AI adoption".to_string()],
        recommended_skills: vec!["Kubernetes".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_insight_reads_model_json() {
        let raw = r#"{
            "salaryRanges": [
                { "role": "Data Analyst", "min": 55000, "max": 95000, "median": 72000, "location": "Remote" }
            ],
            "growthRate": 4.2,
            "demandLevel": "High",
            "topSkills": ["SQL", "Python"],
            "marketOutlook": "Positive",
            "keyTrends": ["Self-serve BI"],
            "recommendedSkills": ["dbt"]
        }"#;
        let parsed: GeneratedInsight = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.salary_ranges[0].median, 72_000.0);
        assert_eq!(parsed.demand_level, "High");
    }

    #[test]
    fn test_from_generated_normalizes_enums() {
        let now = Utc::now();
        let insight =
            NewIndustryInsight::from_generated("Tech", sample_generated(" high ", "\"Neutral\""), now)
                .unwrap();
        assert_eq!(insight.demand_level, DemandLevel::High);
        assert_eq!(insight.market_outlook, MarketOutlook::Neutral);
        assert_eq!(insight.industry, "Tech");
    }

    #[test]
    fn test_next_update_is_one_week_out() {
        let now = Utc::now();
        let insight =
            NewIndustryInsight::from_generated("Tech", sample_generated("Low", "Negative"), now)
                .unwrap();
        assert_eq!(insight.next_update - insight.last_updated, Duration::days(7));
    }

    #[test]
    fn test_invalid_demand_level_names_the_value() {
        let err = NewIndustryInsight::from_generated(
            "Tech",
            sample_generated("Very High", "Positive"),
            Utc::now(),
        )
        .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid demandLevel: VERY HIGH"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_market_outlook_rejected() {
        let err = NewIndustryInsight::from_generated(
            "Tech",
            sample_generated("Medium", "bullish"),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid marketOutlook: BULLISH"));
    }
}
