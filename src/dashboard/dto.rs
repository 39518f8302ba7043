use serde::Serialize;

/// Dashboard payload returned to the backoffice frontend.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub name: String,
    pub level: String,
    pub referrals: Vec<String>,
    pub benefits: Vec<String>,
}
