use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub admin_username: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);
        let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "RIZZO".into());
        Self {
            port,
            admin_username,
        }
    }
}
