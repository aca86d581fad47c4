use std::env;

/// Default upstream chat-completion endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.appzone.tech/v1/chat/completions";

/// Anonymous caller identity. Not a secret; acceptable outside production
/// when no real identity is configured.
const ANONYMOUS_USER_ID: &str = "$RCAnonymousID:244d823996e54fa5ae6150981da30ba9";

#[derive(Clone, Debug)]
pub struct Config {
    pub upstream_url: String,
    pub upstream_api_key: String,
    pub upstream_user_id: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            upstream_url: env::var("UPSTREAM_API_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            upstream_api_key: env::var("UPSTREAM_API_KEY")
                .expect("UPSTREAM_API_KEY must be set"),
            upstream_user_id: env::var("UPSTREAM_USER_ID")
                .unwrap_or_else(|_| ANONYMOUS_USER_ID.to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
