use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "FINLIT_API_BASE";

pub const CHAT_PATH: &str = "/api/chat";
pub const NEWS_SUMMARY_PATH: &str = "/api/news/summary";

/// Number of prior conversation turns sent along with a chat message.
pub const CHAT_CONTEXT_WINDOW: usize = 5;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the API base URL from the environment, falling back to the default.
///
/// Trailing slashes are stripped so endpoint paths can be appended directly.
pub fn api_base_from_env() -> String {
    match std::env::var(API_BASE_ENV) {
        Ok(v) if !v.trim().is_empty() => normalize_base(&v),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
