use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::dashboard::dto::DashboardResponse;
use crate::state::AppState;

/// Account tier shown on the dashboard; every account is on the same one.
const LEVEL: &str = "Starter";

/// Benefit lines rendered on the dashboard, in display order.
const BENEFITS: [&str; 6] = [
    "Full access to your back office",
    "Referral earnings paid daily",
    "Ad credits for Facebook/TikTok/Instagram/YouTube",
    "Cloud hosting (Empire package)",
    "Custom email (upgrade)",
    "Lifetime earnings",
];

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/user/me", get(me))
}

#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        name: state.config.admin_username.clone(),
        level: LEVEL.into(),
        referrals: Vec::new(),
        benefits: BENEFITS.iter().map(|s| s.to_string()).collect(),
    })
}
