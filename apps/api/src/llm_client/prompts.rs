// Shared prompt fragments.
// Each feature that calls the model defines its own prompts.rs alongside it;
// only cross-cutting instructions live here.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured market analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations, notes or apologies.";
