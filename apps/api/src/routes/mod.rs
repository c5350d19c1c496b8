pub mod health;


use axum::{
    routing::{get, put},
    Router,
};

use crate::insights::handlers as insights;
use crate::profile::handlers as profile;
use crate::state::AppState;
use crate::testimonials;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/insights", get(insights::handle_get_insight))
        .route("/api/v1/profile", put(profile::handle_update_profile))
        .route(
            "/api/v1/onboarding/status",
            get(profile::handle_onboarding_status),
        )
        .route(
            "/api/v1/testimonials",
            get(testimonials::handle_list_testimonials),
        )
        .with_state(state)
}
