// Industry insights: generation, normalization, and create-or-reuse caching.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod provider;
