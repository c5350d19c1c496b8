// Industry insight prompt template. `{industry}` is substituted per call.

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry and provide insights in ONLY the following JSON format without any additional notes or explanations:
{
  "salaryRanges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "string" }
  ],
  "growthRate": number,
  "demandLevel": "High" | "Medium" | "Low",
  "topSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"],
  "marketOutlook": "Positive" | "Neutral" | "Negative",
  "keyTrends": ["trend1", "trend2", "trend3", "trend4", "trend5"],
  "recommendedSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"]
}

Include at least 5 common roles in salaryRanges. growthRate is a percentage.

IMPORTANT: Return ONLY the JSON. No extra text, markdown, or commentary."#;

pub fn build_insight_prompt(industry: &str) -> String {
    INSIGHT_PROMPT_TEMPLATE.replace("{industry}", industry)
}
